//! Application layer services implementing business logic.
//!
//! Services consume repository traits from the domain layer and orchestrate
//! validation, code allocation, and storage calls.
//!
//! - [`services::CodeAllocator`] - Short code allocation with collision retry
//! - [`services::ShortenerService`] - Shorten/resolve/admin operations

pub mod services;
