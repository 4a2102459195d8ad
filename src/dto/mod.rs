//! Request and response schemas exchanged with the transport layer.

pub mod shorten;

pub use shorten::{ShortenRequest, UrlInfo};
