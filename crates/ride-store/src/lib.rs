//! `ride-store` — data access for users and hosted rides.
//!
//! The relational store itself is an external collaborator.  This crate
//! models its rows, builds the parameterized search predicate the ride
//! search screen issues, and ships an embedded SQLite implementation used
//! by tests and local development.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`model`]  | `UserId`, `RideId`, `User`, `NewUser`, `NewRide`, `RideSummary` |
//! | [`search`] | `RideSearch`, `Predicate`, `SqlParam`                        |
//! | [`loader`] | `load_rides_csv`, `load_rides_reader`                        |
//! | [`sqlite`] | `SqliteStore`, `SyncOutcome` (feature = `"sqlite"`)          |
//! | [`error`]  | `StoreError`, `StoreResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag     | Effect                                                      |
//! |----------|-------------------------------------------------------------|
//! | `sqlite` | Enables `SqliteStore` via `rusqlite` (on by default).       |

pub mod error;
pub mod loader;
pub mod model;
pub mod search;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use loader::{load_rides_csv, load_rides_reader};
pub use model::{NewRide, NewUser, RideId, RideSummary, User, UserId};
pub use search::{Predicate, RideSearch, SqlParam};

#[cfg(feature = "sqlite")]
pub use sqlite::{SqliteStore, SyncOutcome};
