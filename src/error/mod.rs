//! Error handling for the API surface.
//!
//! `ApiError` is the single error type handlers return. `types` defines the
//! taxonomy, `conversion` maps each variant to an HTTP response.

pub mod conversion;
pub mod types;

pub use types::ApiError;
