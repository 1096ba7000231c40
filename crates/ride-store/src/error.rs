//! Error types for ride-store.

use thiserror::Error;

/// Errors that can occur when validating, loading or storing records.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Required request fields that were empty, in request order.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("no user registered with email {0}")]
    UnknownUser(String),

    /// Neither the stored user nor the request carries an identity-provider id.
    #[error("user {0} has no identity provider id")]
    NoIdentity(String),

    /// The identity-provider id is already bound to a different email.
    #[error("identity for {0} conflicts with an existing user")]
    Conflict(String),

    #[error("ride data parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
