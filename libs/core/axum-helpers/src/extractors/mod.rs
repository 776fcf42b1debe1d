//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with [`crate::AppError`], so malformed input gets the
//! same JSON error body as every other failure.

pub mod json;
pub mod uuid_path;

pub use json::JsonBody;
pub use uuid_path::UuidPath;
