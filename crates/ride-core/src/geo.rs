//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude in degrees.  Encoded polylines
//! carry five decimal places (~1 m), and region spans go down to a few
//! thousandths of a degree, so single precision would eat most of the
//! useful digits.

use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate in degrees.
///
/// No range is enforced on construction: points decoded from external data
/// are untrusted until checked with [`is_valid`](Self::is_valid) or
/// [`validated`](Self::validated).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const ORIGIN: GeoPoint = GeoPoint { lat: 0.0, lon: 0.0 };

    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` if both components are finite and inside
    /// lat ∈ [-90, 90], lon ∈ [-180, 180].
    #[inline]
    pub fn is_valid(self) -> bool {
        self.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Return `self` if it passes [`is_valid`](Self::is_valid).
    pub fn validated(self) -> CoreResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(CoreError::CoordinateOutOfRange { lat: self.lat, lon: self.lon })
        }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Parses `"lat,lon"` (whitespace around either number is ignored).
///
/// The result is range-checked: route parameters arrive as free text from
/// the navigation layer.
impl FromStr for GeoPoint {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| CoreError::Parse(format!("expected \"lat,lon\", got {s:?}")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| CoreError::Parse(format!("invalid coordinate {v:?}: {e}")))
        };
        GeoPoint::new(parse(lat)?, parse(lon)?).validated()
    }
}
