//! Row and request types for the `users` and `rides` tables.
//!
//! Times are Unix seconds (UTC).  Request types mirror what the app posts;
//! their `validate` methods apply the same required-field rules as the
//! backend, where an empty string or a zero number counts as missing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{StoreError, StoreResult};

// ── Identifiers ───────────────────────────────────────────────────────────────

/// Stable user identifier issued by the identity provider.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Primary key of a `rides` row.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RideId(pub i64);

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RideId({})", self.0)
    }
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// A `users` row.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct User {
    pub id:      i64,
    pub auth_id: Option<UserId>,
    pub name:    String,
    pub email:   String,
}

/// Sign-up payload synced into `users`, keyed by email.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub auth_id: Option<UserId>,
    pub name:    String,
    pub email:   String,
}

impl NewUser {
    pub fn validate(&self) -> StoreResult<()> {
        let missing: Vec<&'static str> = [("email", &self.email), ("name", &self.name)]
            .into_iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(k, _)| k)
            .collect();
        if missing.is_empty() { Ok(()) } else { Err(StoreError::MissingFields(missing)) }
    }
}

// ── Rides ─────────────────────────────────────────────────────────────────────

/// Payload for hosting a ride.  The host is identified by `email`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NewRide {
    pub email:               String,
    /// Fallback identity when the stored user has none.
    #[serde(default)]
    pub auth_id:             Option<UserId>,
    pub origin_address:      String,
    pub destination_address: String,
    pub departure_unix_secs: i64,
    pub price:               f64,
    pub car_model:           String,
    pub seats:               u32,
    pub phone_number:        String,
}

impl NewRide {
    /// Names (in request spelling) of every required field left empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("email",              self.email.trim().is_empty()),
            ("originAddress",      self.origin_address.trim().is_empty()),
            ("destinationAddress", self.destination_address.trim().is_empty()),
            ("departureTime",      self.departure_unix_secs == 0),
            ("price",              self.price == 0.0 || self.price.is_nan()),
            ("car",                self.car_model.trim().is_empty()),
            ("seats",              self.seats == 0),
            ("phone",              self.phone_number.trim().is_empty()),
        ];
        checks.into_iter().filter(|&(_, missing)| missing).map(|(k, _)| k).collect()
    }

    pub fn validate(&self) -> StoreResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() { Ok(()) } else { Err(StoreError::MissingFields(missing)) }
    }
}

/// A hosted ride joined with its driver's name, as listed by ride search.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RideSummary {
    pub id:                  RideId,
    pub origin_address:      String,
    pub destination_address: String,
    pub departure_unix_secs: i64,
    pub price:               f64,
    pub car_model:           String,
    pub available_seats:     u32,
    pub phone_number:        String,
    /// `None` once the host's user row is gone or its identity changed.
    pub driver_name:         Option<String>,
}

impl RideSummary {
    /// Whole minutes from `now_unix_secs` until departure, never negative.
    pub fn minutes_until(&self, now_unix_secs: i64) -> i64 {
        (self.departure_unix_secs - now_unix_secs).div_euclid(60).max(0)
    }

    /// `(first, last)` driver name for the driver card, with placeholders
    /// for missing parts.
    pub fn driver_names(&self) -> (&str, &str) {
        let mut parts = self.driver_name.as_deref().unwrap_or_default().split_whitespace();
        let first = parts.next().unwrap_or("Unknown");
        let last = parts.next().unwrap_or("Driver");
        (first, last)
    }

    /// Price formatted with two decimals, as shown on ride cards.
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }
}
