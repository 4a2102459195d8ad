//! URL shortening and management service.

use std::sync::Arc;

use crate::application::services::CodeAllocator;
use crate::config::Config;
use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::codegen::generate_secret_key;
use crate::utils::url_norm::normalize_url;

/// Service for creating, resolving, and managing shortened URLs.
///
/// Owns the create-side retry: when storage reports a short-code conflict
/// (a concurrent caller won the race on the same code), the whole allocation
/// is re-run rather than the insert alone.
pub struct ShortenerService<R: UrlRepository> {
    repository: Arc<R>,
    allocator: CodeAllocator<R>,
}

impl<R: UrlRepository> ShortenerService<R> {
    /// Creates a new service wired to the given repository.
    ///
    /// Code length and the allocation retry budget come from `config`.
    pub fn new(repository: Arc<R>, config: &Config) -> Self {
        let allocator = CodeAllocator::new(
            repository.clone(),
            config.code_length,
            config.code_max_attempts,
        );

        Self {
            repository,
            allocator,
        }
    }

    /// Shortens a target URL, returning the stored record.
    ///
    /// The URL is normalized first, then a code is allocated and the record
    /// inserted together with its derived admin secret key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed or non-HTTP(S) URLs.
    /// Returns [`AppError::AllocationExhausted`] when no free code could be
    /// claimed within the retry budget.
    pub async fn shorten(&self, target_url: &str) -> Result<UrlRecord, AppError> {
        let normalized_url =
            normalize_url(target_url).map_err(|e| AppError::Validation(e.to_string()))?;

        let max_attempts = self.allocator.max_attempts();

        for _ in 0..max_attempts {
            let short_code = self.allocator.allocate(&normalized_url).await?;
            let secret_key = generate_secret_key(&short_code);

            let new_record = NewUrlRecord {
                short_code: short_code.clone(),
                secret_key,
                target_url: normalized_url.clone(),
            };

            match self.repository.create(new_record).await {
                Ok(record) => {
                    tracing::info!(code = %record.short_code, "created short link");
                    return Ok(record);
                }
                Err(AppError::Conflict(_)) => {
                    tracing::warn!(code = %short_code, "lost allocation race, reallocating");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::AllocationExhausted {
            attempts: max_attempts,
        })
    }

    /// Resolves a short code for redirection, counting the visit.
    ///
    /// Only active records resolve; deactivated codes behave as missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown or deactivated codes.
    pub async fn resolve(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        let mut record = self
            .repository
            .find_by_code(short_code)
            .await?
            .filter(|r| r.is_active)
            .ok_or_else(|| AppError::NotFound(format!("short code '{short_code}'")))?;

        if self.repository.increment_clicks(short_code).await? {
            record.clicks += 1;
        }

        Ok(record)
    }

    /// Looks up a record by its admin secret key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active record matches.
    pub async fn admin_info(&self, secret_key: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_secret_key(secret_key)
            .await?
            .filter(|r| r.is_active)
            .ok_or_else(|| AppError::NotFound("no active link for this admin key".to_string()))
    }

    /// Deactivates the record matching an admin secret key.
    ///
    /// The record is kept so its short code stays reserved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active record matches.
    pub async fn deactivate(&self, secret_key: &str) -> Result<(), AppError> {
        if !self.repository.deactivate(secret_key).await? {
            return Err(AppError::NotFound(
                "no active link for this admin key".to_string(),
            ));
        }

        tracing::info!("short link deactivated");
        Ok(())
    }
}
