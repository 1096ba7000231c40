//! CSV ride fixture loader.
//!
//! # CSV format
//!
//! One row per ride to host.  `auth_id` may be left empty.
//!
//! ```csv
//! email,auth_id,origin_address,destination_address,departure_unix_secs,price,car_model,seats,phone_number
//! asha@example.com,user_2a,MG Road,Whitefield,1767250800,180.0,Swift,3,+91 98450 00000
//! ```
//!
//! Rows are parsed only; required-field validation happens when a ride is
//! hosted, so a fixture can carry deliberately incomplete rows.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{NewRide, StoreError, StoreResult, UserId};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RideRecord {
    email:               String,
    auth_id:             Option<String>,
    origin_address:      String,
    destination_address: String,
    departure_unix_secs: i64,
    price:               f64,
    car_model:           String,
    seats:               u32,
    phone_number:        String,
}

impl From<RideRecord> for NewRide {
    fn from(r: RideRecord) -> Self {
        NewRide {
            email:               r.email,
            auth_id:             r.auth_id.filter(|s| !s.trim().is_empty()).map(UserId),
            origin_address:      r.origin_address,
            destination_address: r.destination_address,
            departure_unix_secs: r.departure_unix_secs,
            price:               r.price,
            car_model:           r.car_model,
            seats:               r.seats,
            phone_number:        r.phone_number,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load ride requests from a CSV file.
pub fn load_rides_csv(path: &Path) -> StoreResult<Vec<NewRide>> {
    let file = std::fs::File::open(path).map_err(StoreError::Io)?;
    load_rides_reader(file)
}

/// Like [`load_rides_csv`] but accepts any `Read` source.
pub fn load_rides_reader<R: Read>(reader: R) -> StoreResult<Vec<NewRide>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let rides = csv_reader
        .deserialize::<RideRecord>()
        .map(|row| {
            row.map(NewRide::from)
                .map_err(|e| StoreError::Parse(e.to_string()))
        })
        .collect::<StoreResult<Vec<_>>>()?;
    log::debug!("loaded {} ride rows", rides.len());
    Ok(rides)
}
