//! The shared library for Mergington, the activity signup service for Mergington High School.
//!
//! This library provides the pieces shared by the backend and its tests:
//! wire data structures, error types and logging setup.

pub mod data;
pub mod errors;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
