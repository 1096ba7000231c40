//! `ride-polyline` — encoded route geometry.
//!
//! Directions services return route shapes as *encoded polylines*: ASCII
//! strings where each coordinate is scaled by 1e5, delta-coded against the
//! previous point, zig-zag signed and split into 5-bit groups offset by 63.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`decode`] | `decode`, `decode_validated`, `Polyline`, `Points`         |
//! | [`encode`] | `encode` (reference encoder)                               |
//! | [`error`]  | `DecodeError`, `DecodeResult<T>`                           |
//!
//! # Example
//!
//! ```
//! use ride_core::GeoPoint;
//!
//! let points = ride_polyline::decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
//! assert_eq!(points.len(), 3);
//! assert_eq!(points[0], GeoPoint::new(38.5, -120.2));
//! ```

pub mod decode;
pub mod encode;
pub mod error;


pub use decode::{decode, decode_validated, Points, Polyline};
pub use encode::encode;
pub use error::{DecodeError, DecodeResult};

/// Fixed-point scale of every encoded coordinate (five decimal places).
pub const SCALE: f64 = 1e5;
