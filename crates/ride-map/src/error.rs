//! Map-subsystem error type.
//!
//! Fitting itself never fails; only configuration is checked.

use thiserror::Error;

/// Errors produced by `ride-map`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("invalid fit configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid bottom sheet configuration: {0}")]
    InvalidSheet(String),
}

pub type MapResult<T> = Result<T, MapError>;
