//! # Shortener Core
//!
//! Core library for a URL-shortening service: short-code allocation with
//! collision resolution, durable URL records behind a repository interface,
//! and the request/response schemas the transport layer exchanges.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Code allocation and link management
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL persistence
//! - **DTO Layer** ([`dto`]) - Serialization and validation schemas
//!
//! HTTP routing, authentication, and rate limiting are out of scope; a server
//! binary wires this library to whatever transport it wants.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use shortener_core::config;
//! use shortener_core::application::services::ShortenerService;
//! use shortener_core::dto::UrlInfo;
//! use shortener_core::infrastructure::persistence::{self, PgUrlRepository};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = config::load_from_env()?;
//! shortener_core::logging::init(&config);
//!
//! let pool = Arc::new(persistence::connect_pool(&config).await?);
//! persistence::run_migrations(&pool).await?;
//!
//! let repository = Arc::new(PgUrlRepository::new(pool));
//! let service = ShortenerService::new(repository, &config);
//!
//! let record = service.shorten("https://example.com/docs").await?;
//! let info = UrlInfo::from_record(&record, &config.base_url);
//! println!("{} -> {}", info.url, record.target_url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Settings are loaded from environment variables via [`config::Config`],
//! once at process start. See the [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod utils;

pub use config::Config;
pub use error::{AppError, AppResult};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CodeAllocator, ShortenerService};
    pub use crate::config::Config;
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::dto::{ShortenRequest, UrlInfo};
    pub use crate::error::{AppError, AppResult};
}
