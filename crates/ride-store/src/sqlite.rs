//! SQLite store (feature `sqlite`).
//!
//! Two tables, `users` and `rides`, joined on the identity-provider id.  A
//! ride is always stored under its host's identity so search results can
//! carry the driver's name.

use std::path::Path;

use rusqlite::{Connection, ErrorCode, OptionalExtension, Row};

use crate::search::SqlParam;
use crate::{NewRide, NewUser, RideId, RideSearch, RideSummary, StoreError, StoreResult, User, UserId};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id      INTEGER PRIMARY KEY AUTOINCREMENT,
        auth_id TEXT UNIQUE,
        name    TEXT NOT NULL,
        email   TEXT NOT NULL UNIQUE
    );
    CREATE TABLE IF NOT EXISTS rides (
        id                  INTEGER PRIMARY KEY AUTOINCREMENT,
        auth_id             TEXT    NOT NULL,
        origin_address      TEXT    NOT NULL,
        destination_address TEXT    NOT NULL,
        departure_time      INTEGER NOT NULL,
        price               REAL    NOT NULL,
        car_model           TEXT    NOT NULL,
        available_seats     INTEGER NOT NULL,
        phone_number        TEXT    NOT NULL
    );
    CREATE INDEX IF NOT EXISTS rides_departure ON rides (departure_time);";

/// Ride columns plus the host's name.  The join is outer so a ride outlives
/// its host's user row and identity changes.
const SUMMARY_SELECT: &str = "
    SELECT r.id, r.origin_address, r.destination_address, r.departure_time,
           r.price, r.car_model, r.available_seats, r.phone_number, u.name
    FROM rides r LEFT JOIN users u ON r.auth_id = u.auth_id";

/// What [`SqliteStore::sync_user`] did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SyncOutcome {
    Created,
    Updated,
    Unchanged,
}

impl rusqlite::ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        match self {
            SqlParam::Text(s)    => s.to_sql(),
            SqlParam::Integer(i) => i.to_sql(),
        }
    }
}

/// Users/rides store backed by a single SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// A private in-memory database.
    pub fn in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    // ── Users ─────────────────────────────────────────────────────────────

    pub fn user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT id, auth_id, name, email FROM users WHERE email = ?1",
                [email],
                |r| {
                    Ok(User {
                        id:      r.get(0)?,
                        auth_id: r.get::<_, Option<String>>(1)?.map(UserId),
                        name:    r.get(2)?,
                        email:   r.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    /// Insert the user, or bring the stored name and identity up to date.
    ///
    /// A request without an identity keeps the stored one.
    pub fn sync_user(&self, user: &NewUser) -> StoreResult<SyncOutcome> {
        user.validate()?;

        let outcome = match self.user_by_email(&user.email)? {
            None => {
                self.conn
                    .execute(
                        "INSERT INTO users (auth_id, name, email) VALUES (?1, ?2, ?3)",
                        rusqlite::params![
                            user.auth_id.as_ref().map(UserId::as_str),
                            user.name,
                            user.email
                        ],
                    )
                    .map_err(|e| conflict_or(e, &user.email))?;
                SyncOutcome::Created
            }
            Some(existing) => {
                let auth_id = user.auth_id.clone().or(existing.auth_id.clone());
                if auth_id == existing.auth_id && user.name == existing.name {
                    SyncOutcome::Unchanged
                } else {
                    self.conn
                        .execute(
                            "UPDATE users SET name = ?1, auth_id = ?2 WHERE email = ?3",
                            rusqlite::params![
                                user.name,
                                auth_id.as_ref().map(UserId::as_str),
                                user.email
                            ],
                        )
                        .map_err(|e| conflict_or(e, &user.email))?;
                    SyncOutcome::Updated
                }
            }
        };

        log::info!("user {} sync: {outcome:?}", user.email);
        Ok(outcome)
    }

    /// Remove the user bound to `auth_id`.  Returns `false` if there was none.
    ///
    /// Rides the user hosted are kept and list without a driver name.
    pub fn delete_user(&self, auth_id: &UserId) -> StoreResult<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM users WHERE auth_id = ?1", [auth_id.as_str()])?;
        log::info!("delete user {auth_id}: {deleted} row(s)");
        Ok(deleted > 0)
    }

    // ── Rides ─────────────────────────────────────────────────────────────

    /// Host a ride for the user registered under `ride.email`.
    pub fn host_ride(&self, ride: &NewRide) -> StoreResult<RideId> {
        let host = self
            .user_by_email(&ride.email)?
            .ok_or_else(|| StoreError::UnknownUser(ride.email.clone()))?;
        ride.validate()?;

        let auth_id = host
            .auth_id
            .or_else(|| ride.auth_id.clone())
            .ok_or_else(|| StoreError::NoIdentity(ride.email.clone()))?;

        self.conn.execute(
            "INSERT INTO rides (auth_id, origin_address, destination_address, departure_time, \
             price, car_model, available_seats, phone_number) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                auth_id.as_str(),
                ride.origin_address,
                ride.destination_address,
                ride.departure_unix_secs,
                ride.price,
                ride.car_model,
                ride.seats,
                ride.phone_number,
            ],
        )?;
        let id = RideId(self.conn.last_insert_rowid());
        log::info!("hosted {id} for {}", ride.email);
        Ok(id)
    }

    /// Upcoming rides matching `search`, earliest departure first.
    pub fn search_rides(&self, search: &RideSearch) -> StoreResult<Vec<RideSummary>> {
        let predicate = search.predicate();
        let sql = format!(
            "{SUMMARY_SELECT} WHERE {} ORDER BY {}",
            predicate.sql, predicate.order_by
        );

        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rides = stmt
            .query_map(rusqlite::params_from_iter(predicate.params.iter()), summary_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "search {:?} -> {:?}: {} rides",
            search.origin,
            search.destination,
            rides.len()
        );
        Ok(rides)
    }

    /// A single ride with its driver's name, whether or not it has departed.
    pub fn ride_by_id(&self, id: RideId) -> StoreResult<Option<RideSummary>> {
        let ride = self
            .conn
            .query_row(
                &format!("{SUMMARY_SELECT} WHERE r.id = ?1 LIMIT 1"),
                [id.0],
                summary_from_row,
            )
            .optional()?;
        if ride.is_none() {
            log::debug!("{id} not found");
        }
        Ok(ride)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn summary_from_row(r: &Row<'_>) -> rusqlite::Result<RideSummary> {
    Ok(RideSummary {
        id:                  RideId(r.get(0)?),
        origin_address:      r.get(1)?,
        destination_address: r.get(2)?,
        departure_unix_secs: r.get(3)?,
        price:               r.get(4)?,
        car_model:           r.get(5)?,
        available_seats:     r.get(6)?,
        phone_number:        r.get(7)?,
        driver_name:         r.get(8)?,
    })
}

/// Map a uniqueness violation to [`StoreError::Conflict`].
fn conflict_or(e: rusqlite::Error, email: &str) -> StoreError {
    match e.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => StoreError::Conflict(email.to_owned()),
        _ => StoreError::Sqlite(e),
    }
}
