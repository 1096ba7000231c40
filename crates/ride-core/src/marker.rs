//! Map markers: a position plus an opaque display tag.
//!
//! The geometry crates only ever read a marker's position.  The tag travels
//! alongside so the rendering surface can pick a pin colour without a second
//! lookup.

use crate::GeoPoint;

/// Display category of a marker.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum MarkerTag {
    /// Pick-up point of the current trip.
    #[default]
    Origin,
    /// Drop-off point of the current trip.
    Destination,
    /// A hosted ride offered near the trip.
    Ride,
    /// Any other caller-defined category, carried through untouched.
    Custom(String),
}

impl MarkerTag {
    /// Pin colour name understood by the rendering surface.
    pub fn color(&self) -> &str {
        match self {
            MarkerTag::Origin      => "blue",
            MarkerTag::Destination => "red",
            MarkerTag::Ride        => "green",
            MarkerTag::Custom(c)   => c,
        }
    }
}

impl std::fmt::Display for MarkerTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.color())
    }
}

/// A point of interest rendered on the map.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub position: GeoPoint,
    pub tag:      MarkerTag,
}

impl Marker {
    #[inline]
    pub fn new(position: GeoPoint, tag: MarkerTag) -> Self {
        Self { position, tag }
    }

    pub fn origin(position: GeoPoint) -> Self {
        Self::new(position, MarkerTag::Origin)
    }

    pub fn destination(position: GeoPoint) -> Self {
        Self::new(position, MarkerTag::Destination)
    }

    pub fn ride(position: GeoPoint) -> Self {
        Self::new(position, MarkerTag::Ride)
    }
}

impl From<GeoPoint> for Marker {
    /// Untagged points (e.g. decoded route vertices) default to `Origin`.
    fn from(position: GeoPoint) -> Self {
        Self::new(position, MarkerTag::default())
    }
}
