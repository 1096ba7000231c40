//! Reference encoder, the inverse of [`decode`](crate::decode).
//!
//! Coordinates are rounded to the nearest 1e-5 degree, so a round trip is
//! exact only up to that quantisation.  Points that are not finite, or whose
//! scaled coordinates do not fit in 32 bits, are skipped, as the region
//! fitter skips them.

use ride_core::GeoPoint;

use crate::SCALE;

/// Encode `points` as a polyline string.
pub fn encode(points: &[GeoPoint]) -> String {
    // Most deltas along a road fit in three or four groups per component.
    let mut out = String::with_capacity(points.len() * 8);
    let (mut prev_lat, mut prev_lon) = (0i64, 0i64);

    for p in points {
        let (Some(lat), Some(lon)) = (scaled(p.lat), scaled(p.lon)) else {
            log::debug!("skipping unencodable point {p}");
            continue;
        };
        push_value(lat - prev_lat, &mut out);
        push_value(lon - prev_lon, &mut out);
        prev_lat = lat;
        prev_lon = lon;
    }

    out
}

/// `degrees` in 1e-5 units, if finite and within `i32`.
fn scaled(degrees: f64) -> Option<i64> {
    let v = (degrees * SCALE).round();
    (v.is_finite() && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX)).then_some(v as i64)
}

fn push_value(delta: i64, out: &mut String) {
    let mut v = delta << 1;
    if delta < 0 {
        v = !v;
    }
    while v >= 0x20 {
        out.push(char::from((0x20 | (v & 0x1f)) as u8 + 63));
        v >>= 5;
    }
    out.push(char::from(v as u8 + 63));
}
