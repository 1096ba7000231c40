//! Recomputation on input change.
//!
//! A ride screen has three inputs that move independently: the marker set
//! (trip endpoints, nearby rides), the decoded route, and the height of the
//! bottom panel (updated on every frame of a drag).  [`MapFramer`] keeps the
//! latest value of each, re-runs the [`RegionFitter`] from scratch after any
//! change, and hands the new [`Framing`] to a [`RegionObserver`].  No state
//! carries over from one framing to the next.

use ride_core::{GeoPoint, Marker};

use crate::region::{Framing, Viewport};
use crate::RegionFitter;

// ── RegionObserver ────────────────────────────────────────────────────────────

/// Receives every recomputed framing, typically to push it to the map view.
///
/// Closures taking `&Framing` implement this trait directly:
///
/// ```
/// use ride_core::{GeoPoint, Marker};
/// use ride_map::{MapFramer, RegionFitter};
///
/// let mut seen = Vec::new();
/// let mut framer = MapFramer::new(RegionFitter::default(), |f: &ride_map::Framing| {
///     seen.push(f.region)
/// });
/// framer.set_markers(vec![Marker::origin(GeoPoint::new(12.9716, 77.5946))]);
/// drop(framer);
/// assert_eq!(seen.len(), 2); // initial framing + marker update
/// ```
pub trait RegionObserver {
    fn on_framing(&mut self, framing: &Framing);
}

impl<F: FnMut(&Framing)> RegionObserver for F {
    fn on_framing(&mut self, framing: &Framing) {
        self(framing)
    }
}

/// A [`RegionObserver`] that does nothing.  Use when only
/// [`MapFramer::framing`] is read back.
pub struct NoopObserver;

impl RegionObserver for NoopObserver {
    fn on_framing(&mut self, _framing: &Framing) {}
}

// ── MapFramer ─────────────────────────────────────────────────────────────────

/// Latest inputs of one map view plus the framing derived from them.
pub struct MapFramer<O: RegionObserver> {
    fitter:   RegionFitter,
    markers:  Vec<Marker>,
    route:    Vec<GeoPoint>,
    viewport: Option<Viewport>,
    current:  Framing,
    observer: O,
}

impl<O: RegionObserver> MapFramer<O> {
    /// Create a framer with no markers, no route and no viewport.  The
    /// observer immediately receives the default (empty) framing.
    pub fn new(fitter: RegionFitter, observer: O) -> Self {
        let current = fitter.frame_points(&[], None);
        let mut framer = Self {
            fitter,
            markers: Vec::new(),
            route: Vec::new(),
            viewport: None,
            current,
            observer,
        };
        framer.observer.on_framing(&framer.current);
        framer
    }

    // ── Inputs ────────────────────────────────────────────────────────────

    pub fn set_markers(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
        self.recompute();
    }

    /// Replace the route polyline.  Only affects the bounds when
    /// [`FitConfig::include_route`](crate::FitConfig::include_route) is set.
    pub fn set_route(&mut self, route: Vec<GeoPoint>) {
        self.route = route;
        self.recompute();
    }

    pub fn set_viewport(&mut self, viewport: Option<Viewport>) {
        self.viewport = viewport;
        self.recompute();
    }

    /// Update only the occluded height, keeping the viewport height.
    ///
    /// Without a viewport there is no height to measure the panel against,
    /// so the value is dropped.
    pub fn set_occlusion(&mut self, occluded_px: f64) {
        match self.viewport.as_mut() {
            Some(vp) => vp.occluded_px = occluded_px,
            None => {
                log::warn!("occlusion of {occluded_px}px set before the viewport height; ignored");
                return;
            }
        }
        self.recompute();
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn route(&self) -> &[GeoPoint] {
        &self.route
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Framing for the current inputs.
    pub fn framing(&self) -> &Framing {
        &self.current
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn recompute(&mut self) {
        let mut points: Vec<GeoPoint> = self.markers.iter().map(|m| m.position).collect();
        if self.fitter.config().include_route {
            points.extend_from_slice(&self.route);
        }

        self.current = self.fitter.frame_points(&points, self.viewport);
        log::trace!(
            "reframed {} points: center {} shift {:.6}",
            points.len(),
            self.current.region.center,
            self.current.center_shift
        );
        self.observer.on_framing(&self.current);
    }
}
