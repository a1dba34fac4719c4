//! Error types for studyplan
//!
//! Centralized error handling using thiserror. Invalid answers never surface
//! here: they are `FieldError`s, recovered inside the prompt loop.

use thiserror::Error;

/// Errors that can end a planning run
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Input stream ended while a prompt was waiting for an answer
    #[error("Input closed before all answers were given")]
    InputClosed,

    /// Summary generation backend failed
    #[error("Generation error: {0}")]
    Generation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for studyplan operations
pub type Result<T> = std::result::Result<T, PlannerError>;

/// A rejected answer. The display text is the corrective message shown
/// before the prompt is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter a positive whole number for days.")]
    Days,

    #[error("Please enter a positive number for hours per day.")]
    Hours,

    #[error("Please enter a positive whole number for number of topics.")]
    TopicCount,

    #[error("  Please enter a whole number from 1 to 5.")]
    Rating,
}
