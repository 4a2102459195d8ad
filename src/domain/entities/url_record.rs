//! URL record entity mapping a short code to its target.

use chrono::{DateTime, Utc};

/// A shortened URL with its admin key and usage counters.
///
/// `short_code` is unique across all records, active or not; records are
/// never deleted, only deactivated, so a code is never reissued.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    /// Admin key granting management access to this record.
    pub secret_key: String,
    pub target_url: String,
    pub is_active: bool,
    /// Monotonic, non-negative visit counter.
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        short_code: String,
        secret_key: String,
        target_url: String,
        is_active: bool,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            secret_key,
            target_url,
            is_active,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new URL record.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub secret_key: String,
    pub target_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            1,
            "Xk3fQ9a".to_string(),
            "Xk3fQ9a_J7mpR2wN".to_string(),
            "https://example.com/".to_string(),
            true,
            0,
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.short_code, "Xk3fQ9a");
        assert_eq!(record.target_url, "https://example.com/");
        assert!(record.is_active);
        assert_eq!(record.clicks, 0);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_new_url_record_creation() {
        let new_record = NewUrlRecord {
            short_code: "xyz789".to_string(),
            secret_key: "xyz789_aBcDeFgH".to_string(),
            target_url: "https://rust-lang.org/".to_string(),
        };

        assert_eq!(new_record.short_code, "xyz789");
        assert_eq!(new_record.target_url, "https://rust-lang.org/");
    }
}
