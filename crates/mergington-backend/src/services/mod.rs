//! Backend services for activity roster management.
//!
//! This module provides the service layer abstraction for the roster and an
//! in-memory implementation seeded with the school's activities.

pub mod activities;
pub mod seed;

pub use activities::*;
