//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for shortened URL records, keyed by short code.
///
/// The storage layer enforces short-code uniqueness across active and
/// inactive records and surfaces violations as [`AppError::Conflict`], so
/// concurrent allocations racing on the same code resolve at this boundary.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates a new URL record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Storage`] on other database errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code, active or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its admin secret key, active or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_secret_key(&self, secret_key: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Checks whether a short code is already taken.
    ///
    /// Inactive records count as taken; codes are never reissued.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn code_exists(&self, short_code: &str) -> Result<bool, AppError>;

    /// Increments the click counter for a short code.
    ///
    /// Returns `Ok(true)` if a record was updated, `Ok(false)` if the code
    /// is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn increment_clicks(&self, short_code: &str) -> Result<bool, AppError>;

    /// Deactivates the record matching an admin secret key.
    ///
    /// Returns `Ok(true)` if an active record was deactivated, `Ok(false)`
    /// if none matched. The record itself is kept so its code stays
    /// reserved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn deactivate(&self, secret_key: &str) -> Result<bool, AppError>;
}
