//! Error types for the tournament core
//!
//! Operations return the anyhow-based `Result` alias; the specific failure
//! kinds below can be recovered with `downcast_ref::<TournamentError>()`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific tournament scenarios
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TournamentError {
    #[error("Invalid roster: {reason}")]
    InvalidRoster { reason: String },

    #[error("Invalid result: {reason}")]
    InvalidResult { reason: String },

    #[error("Invalid rating: {rating} (ratings must be positive)")]
    InvalidRating { rating: i64 },

    /// The end date precedes the start date; dates are otherwise bookkeeping
    #[error("Invalid tournament dates: end {end} is before start {start}")]
    InvalidDates { start: String, end: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

