//! Application error type shared across all layers.

use thiserror::Error;

/// Convenience alias for results carrying [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the shortener core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed validation (malformed or empty target URL, bad payload).
    #[error("invalid input: {0}")]
    Validation(String),

    /// No active record matches the given short code or secret key.
    #[error("not found: {0}")]
    NotFound(String),

    /// Storage reported a uniqueness violation on the short code.
    ///
    /// Callers re-run allocation on this variant; see
    /// [`crate::application::services::ShortenerService`].
    #[error("short code conflict: {0}")]
    Conflict(String),

    /// The collision-retry budget was exhausted without finding a free code.
    #[error("short code allocation exhausted after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },

    /// Any other storage failure. Propagated upward, never retried.
    #[error("storage unavailable: {0}")]
    Storage(#[source] sqlx::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if crate::utils::db_error::is_unique_violation_on_code(&e) {
            return AppError::Conflict("short code already exists".to_string());
        }

        AppError::Storage(e)
    }
}
