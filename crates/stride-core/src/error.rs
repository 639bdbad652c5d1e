//! Error types for the planner library.

use thiserror::Error;

/// Comprehensive error type for all plan generation operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Invalid input validation errors
    #[error("{reason}")]
    InvalidInput { field: String, reason: String },
    /// Date arithmetic left the supported calendar range
    #[error("Date out of range: {message}")]
    DateOutOfRange {
        message: String,
        #[source]
        source: jiff::Error,
    },
    /// Allocation produced a breakdown that violates its invariants
    #[error("Allocation error: {message}")]
    Allocation { message: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a date arithmetic failure with context.
    pub fn date_out_of_range(message: impl Into<String>, source: jiff::Error) -> Self {
        Self::DateOutOfRange {
            message: message.into(),
            source,
        }
    }

    /// True for errors caused by the caller's input rather than the engine.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Extension trait for mapping date arithmetic failures.
pub trait DateResultExt<T> {
    /// Map a `jiff` error into [`PlannerError::DateOutOfRange`].
    fn date_context(self, message: &str) -> Result<T>;
}

impl<T> DateResultExt<T> for std::result::Result<T, jiff::Error> {
    fn date_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::date_out_of_range(message, e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
