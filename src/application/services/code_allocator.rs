//! Short code allocation with bounded collision retry.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::codegen::generate_code;

/// Allocates unique short codes against the storage layer.
///
/// Allocation is pure with respect to storage: the allocator only probes for
/// existing codes and never inserts. The returned code was absent from
/// storage at the moment of return; concurrent callers can still race on the
/// same code, and that race is resolved by the storage uniqueness constraint,
/// with the caller re-running allocation on [`AppError::Conflict`].
pub struct CodeAllocator<R: UrlRepository> {
    repository: Arc<R>,
    code_length: usize,
    max_attempts: u32,
}

impl<R: UrlRepository> CodeAllocator<R> {
    /// Creates a new allocator.
    pub fn new(repository: Arc<R>, code_length: usize, max_attempts: u32) -> Self {
        Self {
            repository,
            code_length,
            max_attempts,
        }
    }

    /// Allocates a short code for a target URL.
    ///
    /// Generates a fixed-length random code, probes storage for a collision,
    /// and regenerates until a free code is found or the attempt budget runs
    /// out.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `target_url` is empty.
    /// Returns [`AppError::AllocationExhausted`] when the retry budget is
    /// spent. Storage errors are propagated as-is, without retry.
    pub async fn allocate(&self, target_url: &str) -> Result<String, AppError> {
        if target_url.trim().is_empty() {
            return Err(AppError::Validation(
                "target URL must not be empty".to_string(),
            ));
        }

        for attempt in 1..=self.max_attempts {
            let code = generate_code(self.code_length);

            if !self.repository.code_exists(&code).await? {
                return Ok(code);
            }

            tracing::debug!(attempt, code = %code, "short code collision, regenerating");
        }

        tracing::warn!(
            attempts = self.max_attempts,
            "short code allocation exhausted"
        );

        Err(AppError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// The configured collision-retry budget.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}
