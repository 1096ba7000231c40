//! Viewport descriptors handed to the rendering surface.

use ride_core::GeoPoint;

// ── Region ────────────────────────────────────────────────────────────────────

/// A camera region: center plus the total latitude/longitude extent shown.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub center:          GeoPoint,
    /// Full north–south extent in degrees.
    pub latitude_delta:  f64,
    /// Full east–west extent in degrees.
    pub longitude_delta: f64,
}

impl Region {
    #[inline]
    pub fn new(center: GeoPoint, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self { center, latitude_delta, longitude_delta }
    }

    pub fn north(&self) -> f64 {
        self.center.lat + self.latitude_delta / 2.0
    }

    pub fn south(&self) -> f64 {
        self.center.lat - self.latitude_delta / 2.0
    }

    pub fn east(&self) -> f64 {
        self.center.lon + self.longitude_delta / 2.0
    }

    pub fn west(&self) -> f64 {
        self.center.lon - self.longitude_delta / 2.0
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.south()..=self.north()).contains(&p.lat)
            && (self.west()..=self.east()).contains(&p.lon)
    }

    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.latitude_delta.is_finite()
            && self.longitude_delta.is_finite()
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Pixel geometry of the map view and the panel covering its bottom edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Total height of the map view.
    pub height_px:   f64,
    /// Height of the panel overlapping the bottom of the map.
    pub occluded_px: f64,
}

impl Viewport {
    #[inline]
    pub fn new(height_px: f64, occluded_px: f64) -> Self {
        Self { height_px, occluded_px }
    }

    /// An unobstructed view.
    pub fn clear(height_px: f64) -> Self {
        Self::new(height_px, 0.0)
    }

    /// Pixels left uncovered.  Zero or negative when the panel fills the view.
    #[inline]
    pub fn visible_px(&self) -> f64 {
        self.height_px - self.occluded_px
    }
}

// ── Framing ───────────────────────────────────────────────────────────────────

/// Whether the framed points remain visible once the panel is accounted for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Every point lies in the unoccluded part of the region.
    #[default]
    Full,
    /// The occlusion shift pushed at least one point out of the visible band.
    /// The region is still shifted; callers may want to zoom out or collapse
    /// the panel.  With a panel close to the full view height the shifted
    /// center can lie outside [-90, 90].
    Clipped,
    /// The panel covers the whole view.  No shift is applied.
    Obscured,
}

/// Result of framing a point set within a (possibly occluded) viewport.
///
/// The shift is never clamped.  When `visibility` is
/// [`Clipped`](Visibility::Clipped), `region.center.lat` is not guaranteed
/// to be a valid latitude; check `visibility` (or
/// [`GeoPoint::is_valid`](ride_core::GeoPoint::is_valid)) before handing the
/// region to a renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Framing {
    /// Region to hand to the rendering surface.
    pub region:       Region,
    /// Latitude added to the unoccluded center, in degrees.
    pub center_shift: f64,
    pub visibility:   Visibility,
}

impl Framing {
    /// Framing with no occlusion adjustment.
    pub fn unshifted(region: Region) -> Self {
        Self { region, center_shift: 0.0, visibility: Visibility::Full }
    }
}
