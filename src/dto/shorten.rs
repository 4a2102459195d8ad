//! DTOs for shortening requests and URL record responses.

use crate::domain::entities::UrlRecord;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a target URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub target_url: String,
}

/// Full view of a URL record returned to the creator.
///
/// `url` is the public short link; `admin_url` carries the secret key and is
/// only handed out at creation time or on admin lookup.
#[derive(Debug, Serialize, PartialEq)]
pub struct UrlInfo {
    pub target_url: String,
    pub is_active: bool,
    pub clicks: i64,
    pub url: String,
    pub admin_url: String,
}

impl UrlInfo {
    /// Builds the response view for a record, rooted at the public base URL.
    pub fn from_record(record: &UrlRecord, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');

        Self {
            target_url: record.target_url.clone(),
            is_active: record.is_active,
            clicks: record.clicks,
            url: format!("{}/{}", base, record.short_code),
            admin_url: format!("{}/admin/{}", base, record.secret_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_record() -> UrlRecord {
        UrlRecord::new(
            1,
            "Xk3fQ9a".to_string(),
            "Xk3fQ9a_J7mpR2wN".to_string(),
            "https://example.com/".to_string(),
            true,
            12,
            Utc::now(),
        )
    }

    #[test]
    fn test_shorten_request_validation() {
        let valid = ShortenRequest {
            target_url: "https://example.com/page".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = ShortenRequest {
            target_url: "not a url".to_string(),
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_url_info_builds_links_from_base() {
        let info = UrlInfo::from_record(&sample_record(), "https://sho.rt");

        assert_eq!(info.url, "https://sho.rt/Xk3fQ9a");
        assert_eq!(info.admin_url, "https://sho.rt/admin/Xk3fQ9a_J7mpR2wN");
        assert_eq!(info.clicks, 12);
        assert!(info.is_active);
    }

    #[test]
    fn test_url_info_trims_trailing_slash() {
        let info = UrlInfo::from_record(&sample_record(), "http://localhost:8000/");

        assert_eq!(info.url, "http://localhost:8000/Xk3fQ9a");
    }

    #[test]
    fn test_url_info_serializes_expected_fields() {
        let info = UrlInfo::from_record(&sample_record(), "https://sho.rt");
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["url"], "https://sho.rt/Xk3fQ9a");
        assert_eq!(json["admin_url"], "https://sho.rt/admin/Xk3fQ9a_J7mpR2wN");
        assert_eq!(json["target_url"], "https://example.com/");
        assert_eq!(json["is_active"], true);
        assert_eq!(json["clicks"], 12);
    }
}
