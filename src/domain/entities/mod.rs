//! Core domain entities representing the business data model.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
