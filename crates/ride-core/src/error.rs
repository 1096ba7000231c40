//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where a core check (e.g. coordinate range) can fail inside them.

use thiserror::Error;

/// The base error type for `ride-core`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("coordinate ({lat}, {lon}) is outside the valid lat/lon range")]
    CoordinateOutOfRange { lat: f64, lon: f64 },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `ride-core`.
pub type CoreResult<T> = Result<T, CoreError>;
