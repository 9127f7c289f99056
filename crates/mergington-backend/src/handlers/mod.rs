pub mod activities;
pub mod error;
pub mod health;
