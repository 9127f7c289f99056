//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures of roster operations. Each maps onto exactly one HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Activity {0} not found")]
    ActivityNotFound(String),
    #[error("Student {email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("Student {email} is not signed up for {activity}")]
    NotRegistered { activity: String, email: String },
}
