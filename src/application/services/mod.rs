//! Business logic services for the application layer.

pub mod code_allocator;
pub mod shortener_service;

pub use code_allocator::CodeAllocator;
pub use shortener_service::ShortenerService;
