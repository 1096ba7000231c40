//! Polyline decoder.
//!
//! # Format
//!
//! Each point is two signed values (latitude then longitude), each the
//! difference from the previous point in units of 1e-5 degrees.  A value is
//! written as:
//!
//! 1. zig-zag: `v << 1`, bitwise-inverted when `v` is negative,
//! 2. split into 5-bit groups, least significant first,
//! 3. every group except the last OR-ed with the continuation bit `0x20`,
//! 4. each group offset by 63 into printable ASCII (`?` .. `~`).
//!
//! Decoding is a single forward pass over the bytes.  Running sums start at
//! (0, 0) and are kept as integers so no floating-point drift accumulates
//! along long routes.

use ride_core::GeoPoint;

use crate::{DecodeError, DecodeResult, SCALE};

/// Offset added to every 5-bit group.
const BASE: u8 = 63;
/// Continuation flag on all but the final group of a value.
const CONTINUATION: i64 = 0x20;
const GROUP_MASK: i64 = 0x1f;
/// A 32-bit value never needs more than seven 5-bit groups.
const MAX_GROUPS: u32 = 7;

// ── Polyline ──────────────────────────────────────────────────────────────────

/// A borrowed encoded polyline.
///
/// Nothing is decoded until [`points`](Self::points) is iterated, and every
/// call to `points` starts again from the first byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Polyline<'a> {
    encoded: &'a str,
}

impl<'a> Polyline<'a> {
    #[inline]
    pub fn new(encoded: &'a str) -> Self {
        Self { encoded }
    }

    pub fn as_str(&self) -> &'a str {
        self.encoded
    }

    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }

    /// Fresh iterator over the decoded points.
    pub fn points(&self) -> Points<'a> {
        Points {
            bytes: self.encoded.as_bytes(),
            pos:   0,
            lat:   0,
            lon:   0,
            done:  false,
        }
    }
}

impl<'a> IntoIterator for Polyline<'a> {
    type Item = DecodeResult<GeoPoint>;
    type IntoIter = Points<'a>;

    fn into_iter(self) -> Points<'a> {
        self.points()
    }
}

// ── Points iterator ───────────────────────────────────────────────────────────

/// Lazy decoder over the bytes of a [`Polyline`].
///
/// Yields one `Ok(GeoPoint)` per encoded pair.  The first error is yielded
/// once, after which the iterator is exhausted.
#[derive(Clone, Debug)]
pub struct Points<'a> {
    bytes: &'a [u8],
    pos:   usize,
    lat:   i64,
    lon:   i64,
    done:  bool,
}

impl Points<'_> {
    /// Read one zig-zag signed value starting at `self.pos`.
    fn read_value(&mut self) -> DecodeResult<i64> {
        let start = self.pos;
        let mut result: i64 = 0;
        let mut shift = 0;
        let mut groups = 0;

        loop {
            let offset = self.pos;
            let byte = *self
                .bytes
                .get(offset)
                .ok_or(DecodeError::Truncated { offset })?;
            if !(BASE..=BASE + 63).contains(&byte) {
                return Err(DecodeError::InvalidByte { offset, byte });
            }
            if groups == MAX_GROUPS {
                return Err(DecodeError::Overflow { offset: start });
            }

            let chunk = i64::from(byte - BASE);
            result |= (chunk & GROUP_MASK) << shift;
            shift += 5;
            groups += 1;
            self.pos += 1;

            if chunk & CONTINUATION == 0 {
                break;
            }
        }

        Ok(if result & 1 != 0 { !(result >> 1) } else { result >> 1 })
    }

    fn read_point(&mut self) -> DecodeResult<GeoPoint> {
        self.lat += self.read_value()?;
        if self.pos == self.bytes.len() {
            return Err(DecodeError::Truncated { offset: self.pos });
        }
        self.lon += self.read_value()?;
        Ok(GeoPoint::new(self.lat as f64 / SCALE, self.lon as f64 / SCALE))
    }
}

impl Iterator for Points<'_> {
    type Item = DecodeResult<GeoPoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.pos >= self.bytes.len() {
            return None;
        }
        let item = self.read_point();
        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Every point needs at least two bytes.
        let remaining = self.bytes.len() - self.pos;
        (0, Some(remaining.div_ceil(2)))
    }
}

impl std::iter::FusedIterator for Points<'_> {}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decode `encoded` into its ordered point sequence.
///
/// An empty string yields an empty vector.  Points are not range-checked;
/// use [`decode_validated`] for input from an untrusted service.
pub fn decode(encoded: &str) -> DecodeResult<Vec<GeoPoint>> {
    let points: DecodeResult<Vec<GeoPoint>> = Polyline::new(encoded).points().collect();
    if let Err(e) = &points {
        log::debug!("rejecting polyline of {} bytes: {e}", encoded.len());
    }
    points
}

/// Like [`decode`], but fails on the first point outside
/// lat ∈ [-90, 90], lon ∈ [-180, 180].
pub fn decode_validated(encoded: &str) -> DecodeResult<Vec<GeoPoint>> {
    decode(encoded)?
        .into_iter()
        .enumerate()
        .map(|(index, p)| {
            p.validated()
                .map_err(|_| DecodeError::OutOfRange { index, lat: p.lat, lon: p.lon })
        })
        .collect()
}
