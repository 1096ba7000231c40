//! Ride search filter.
//!
//! A search matches rides whose origin and destination addresses contain
//! the requested text (ASCII case-insensitive), that have not departed yet,
//! ordered by departure time.  The same filter is available as a
//! parameterized SQL predicate for the relational store and as an in-memory
//! check over already-fetched rows.
//!
//! # SQL shape
//!
//! ```text
//! r.origin_address LIKE ?1 ESCAPE '\'
//!   AND r.destination_address LIKE ?2 ESCAPE '\'
//!   AND r.departure_time > ?3
//! ORDER BY r.departure_time ASC
//! ```
//!
//! `?1`/`?2` are `%text%` patterns with `%`, `_` and `\` escaped so user
//! input can never widen the match.

use serde::{Deserialize, Serialize};

use crate::RideSummary;

/// A bound parameter of a [`Predicate`].
#[derive(Clone, PartialEq, Debug)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
}

/// A `WHERE` clause body plus its positional parameters.
#[derive(Clone, PartialEq, Debug)]
pub struct Predicate {
    pub sql:      String,
    pub params:   Vec<SqlParam>,
    pub order_by: &'static str,
}

/// Search request from the find-ride screen.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RideSearch {
    pub origin:        String,
    pub destination:   String,
    /// Rides departing at or before this instant are excluded.
    pub now_unix_secs: i64,
}

impl RideSearch {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, now_unix_secs: i64) -> Self {
        Self { origin: origin.into(), destination: destination.into(), now_unix_secs }
    }

    /// Parameterized predicate over `rides r`.
    pub fn predicate(&self) -> Predicate {
        Predicate {
            sql: "r.origin_address LIKE ?1 ESCAPE '\\' \
                  AND r.destination_address LIKE ?2 ESCAPE '\\' \
                  AND r.departure_time > ?3"
                .to_owned(),
            params: vec![
                SqlParam::Text(contains_pattern(&self.origin)),
                SqlParam::Text(contains_pattern(&self.destination)),
                SqlParam::Integer(self.now_unix_secs),
            ],
            order_by: "r.departure_time ASC",
        }
    }

    /// Apply the filter to a fetched row.
    pub fn matches(&self, ride: &RideSummary) -> bool {
        contains_ignore_case(&ride.origin_address, &self.origin)
            && contains_ignore_case(&ride.destination_address, &self.destination)
            && ride.departure_unix_secs > self.now_unix_secs
    }

    /// Filter and order fetched rows the way the SQL predicate would.
    pub fn apply<'a>(&self, rides: impl IntoIterator<Item = &'a RideSummary>) -> Vec<&'a RideSummary> {
        let mut hits: Vec<&RideSummary> = rides.into_iter().filter(|r| self.matches(r)).collect();
        hits.sort_by_key(|r| r.departure_unix_secs);
        hits
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.trim().to_ascii_lowercase())
}
