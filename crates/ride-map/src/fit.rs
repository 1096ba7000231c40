//! Region fitting.
//!
//! # Base region
//!
//! | Points | Center                   | Span per axis                          |
//! |--------|--------------------------|----------------------------------------|
//! | 0      | (0, 0)                   | `empty_span`                           |
//! | 1      | the point                | `single_span`                          |
//! | ≥ 2    | midpoint of the bounds   | `max(margin × range, min_span)`        |
//!
//! Non-finite coordinates are skipped before counting, so a NaN coming from
//! a bad upstream parse can never reach the renderer.
//!
//! # Occlusion
//!
//! With a [`Viewport`] whose bottom `occluded_px` are covered by a panel, the
//! center latitude moves north by
//!
//! ```text
//! latitude_delta × (occluded_px / visible_px) / 2
//! ```
//!
//! where `visible_px = height_px − occluded_px`.  The shift grows strictly
//! with the occluded height until the view is fully covered.  The framed
//! points are then checked against the visible band (the region minus the
//! occluded fraction at the bottom) and the result is reported as a
//! [`Visibility`].

use ride_core::{GeoPoint, Marker};

use crate::region::{Framing, Region, Viewport, Visibility};
use crate::{FitConfig, MapResult};

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned bounds of the finite points seen so far.
#[derive(Copy, Clone, Debug)]
struct Bounds {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
    count:   usize,
}

impl Bounds {
    fn of(points: impl IntoIterator<Item = GeoPoint>) -> Self {
        let mut b = Bounds {
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            min_lon: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
            count:   0,
        };
        for p in points.into_iter().filter(|p| p.is_finite()) {
            b.min_lat = b.min_lat.min(p.lat);
            b.max_lat = b.max_lat.max(p.lat);
            b.min_lon = b.min_lon.min(p.lon);
            b.max_lon = b.max_lon.max(p.lon);
            b.count += 1;
        }
        b
    }

    fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

// ── RegionFitter ──────────────────────────────────────────────────────────────

/// Computes the region that frames a set of markers.
///
/// Stateless apart from its configuration; share one fitter between screens
/// or construct one per call, the results are identical.
#[derive(Clone, Debug, Default)]
pub struct RegionFitter {
    config: FitConfig,
}

impl RegionFitter {
    /// Build a fitter, rejecting an invalid configuration.
    pub fn new(config: FitConfig) -> MapResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Base region framing `markers`.
    pub fn fit(&self, markers: &[Marker]) -> Region {
        self.fit_points(markers.iter().map(|m| m.position))
    }

    /// Base region framing arbitrary points (markers, route vertices, …).
    pub fn fit_points(&self, points: impl IntoIterator<Item = GeoPoint>) -> Region {
        let c = &self.config;
        let bounds = Bounds::of(points);

        match bounds.count {
            0 => Region::new(GeoPoint::ORIGIN, c.empty_span, c.empty_span),
            1 => Region::new(bounds.center(), c.single_span, c.single_span),
            _ => {
                let lat_span = (bounds.max_lat - bounds.min_lat).abs() * c.margin;
                let lon_span = (bounds.max_lon - bounds.min_lon).abs() * c.margin;
                Region::new(
                    bounds.center(),
                    lat_span.max(c.min_span),
                    lon_span.max(c.min_span),
                )
            }
        }
    }

    /// Frame `markers` inside `viewport`, shifting for the occluding panel.
    pub fn frame(&self, markers: &[Marker], viewport: Option<Viewport>) -> Framing {
        let points: Vec<GeoPoint> = markers.iter().map(|m| m.position).collect();
        self.frame_points(&points, viewport)
    }

    /// Point-slice form of [`frame`](Self::frame).
    pub fn frame_points(&self, points: &[GeoPoint], viewport: Option<Viewport>) -> Framing {
        let base = self.fit_points(points.iter().copied());

        let Some(vp) = viewport else {
            return Framing::unshifted(base);
        };
        if vp.occluded_px <= 0.0 || vp.occluded_px.is_nan() {
            return Framing::unshifted(base);
        }

        let visible = vp.visible_px();
        if visible <= 0.0 || !visible.is_finite() {
            log::debug!(
                "panel of {}px covers the {}px map; leaving region unshifted",
                vp.occluded_px,
                vp.height_px
            );
            return Framing { region: base, center_shift: 0.0, visibility: Visibility::Obscured };
        }

        let shift = base.latitude_delta * (vp.occluded_px / visible) / 2.0;
        let mut region = base;
        region.center.lat += shift;

        // Lowest latitude still drawn above the panel.
        let visible_south = region.south() + region.latitude_delta * (vp.occluded_px / vp.height_px);
        let all_visible = points
            .iter()
            .filter(|p| p.is_finite())
            .all(|p| p.lat >= visible_south && p.lat <= region.north());

        let visibility = if all_visible {
            Visibility::Full
        } else {
            log::trace!("occlusion shift {shift:.6}° clips framed points");
            Visibility::Clipped
        };

        Framing { region, center_shift: shift, visibility }
    }
}
