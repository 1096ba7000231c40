//! Draggable bottom sheet that occludes the map.
//!
//! The ride screens lay a panel over the lower part of the map.  The panel
//! rests at one of three detents and can be dragged between them:
//!
//! | Detent | Sheet height                     |
//! |--------|----------------------------------|
//! | `Min`  | `min_height_px` (default 100)    |
//! | `Mid`  | `mid_height_px` (default 400)    |
//! | `Max`  | `max_fraction` × window (0.8)    |
//!
//! Drag updates that would leave `[Min, Max]` are dropped rather than
//! clamped, so the sheet stops at the last in-range position.  On release
//! the sheet snaps to `Max` when more than `snap_tolerance_px` above `Mid`,
//! to `Min` when more than that below, and back to `Mid` otherwise.  Spring
//! animation toward the detent is left to the UI layer.
//!
//! The sheet height is the occlusion height fed to
//! [`MapFramer::set_occlusion`](crate::MapFramer::set_occlusion).

use crate::region::Viewport;
use crate::{MapError, MapResult};

// ── SheetConfig ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetConfig {
    /// Height of the window the sheet slides in.
    pub window_height_px:  f64,
    pub min_height_px:     f64,
    pub mid_height_px:     f64,
    /// Fully expanded height as a fraction of the window.
    pub max_fraction:      f64,
    /// Distance from `Mid` a release must exceed to snap to another detent.
    pub snap_tolerance_px: f64,
}

impl SheetConfig {
    /// Default detents for a window of `window_height_px`.
    pub fn for_window(window_height_px: f64) -> Self {
        Self {
            window_height_px,
            min_height_px:     100.0,
            mid_height_px:     400.0,
            max_fraction:      0.8,
            snap_tolerance_px: 50.0,
        }
    }

    pub fn max_height_px(&self) -> f64 {
        self.window_height_px * self.max_fraction
    }

    /// Check `0 < min < mid < max <= window` and a non-negative tolerance.
    pub fn validate(&self) -> MapResult<()> {
        let values = [
            self.window_height_px,
            self.min_height_px,
            self.mid_height_px,
            self.max_fraction,
            self.snap_tolerance_px,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MapError::InvalidSheet("all sizes must be finite".into()));
        }
        if self.snap_tolerance_px < 0.0 {
            return Err(MapError::InvalidSheet("snap tolerance must not be negative".into()));
        }
        if !(self.max_fraction > 0.0 && self.max_fraction <= 1.0) {
            return Err(MapError::InvalidSheet(format!(
                "max_fraction must be in (0, 1], got {}",
                self.max_fraction
            )));
        }
        let max = self.max_height_px();
        if !(0.0 < self.min_height_px && self.min_height_px < self.mid_height_px && self.mid_height_px < max) {
            return Err(MapError::InvalidSheet(format!(
                "detents must satisfy 0 < min ({}) < mid ({}) < max ({max})",
                self.min_height_px, self.mid_height_px
            )));
        }
        Ok(())
    }
}

// ── Detent ────────────────────────────────────────────────────────────────────

/// Resting positions of the sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Detent {
    Min,
    Mid,
    Max,
}

// ── BottomSheet ───────────────────────────────────────────────────────────────

/// Sheet position and drag state.
#[derive(Clone, Debug)]
pub struct BottomSheet {
    config:       SheetConfig,
    height_px:    f64,
    /// Height when the current drag began; `None` while at rest.
    drag_start:   Option<f64>,
}

impl BottomSheet {
    /// A sheet resting at `Mid`.
    pub fn new(config: SheetConfig) -> MapResult<Self> {
        config.validate()?;
        let height_px = config.mid_height_px;
        Ok(Self { config, height_px, drag_start: None })
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Current sheet height, i.e. the occluded map height.
    pub fn occlusion(&self) -> f64 {
        self.height_px
    }

    /// The map viewport under this sheet.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.config.window_height_px, self.height_px)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    pub fn detent_height(&self, detent: Detent) -> f64 {
        match detent {
            Detent::Min => self.config.min_height_px,
            Detent::Mid => self.config.mid_height_px,
            Detent::Max => self.config.max_height_px(),
        }
    }

    pub fn begin_drag(&mut self) {
        self.drag_start = Some(self.height_px);
    }

    /// Apply a gesture translation (screen pixels, positive = downward)
    /// measured from where the drag began.
    ///
    /// Returns `true` if the sheet moved.
    pub fn drag(&mut self, translation_y: f64) -> bool {
        let start = *self.drag_start.get_or_insert(self.height_px);
        let target = start - translation_y;
        if target >= self.config.min_height_px && target <= self.config.max_height_px() {
            self.height_px = target;
            true
        } else {
            false
        }
    }

    /// End the drag and snap to the detent chosen by the release position.
    pub fn release(&mut self) -> Detent {
        self.drag_start = None;
        let mid = self.config.mid_height_px;
        let tolerance = self.config.snap_tolerance_px;

        let detent = if self.height_px > mid + tolerance {
            Detent::Max
        } else if self.height_px < mid - tolerance {
            Detent::Min
        } else {
            Detent::Mid
        };
        self.height_px = self.detent_height(detent);
        detent
    }

    /// Jump straight to `detent`, cancelling any drag.
    pub fn snap_to(&mut self, detent: Detent) {
        self.drag_start = None;
        self.height_px = self.detent_height(detent);
    }
}
