//! Region fitting configuration.

use crate::{MapError, MapResult};

/// Spans and margins used by [`RegionFitter`](crate::RegionFitter).
///
/// All spans are in degrees.  Typically left at its defaults, or loaded
/// from a JSON file by the application and checked with
/// [`validate`](Self::validate).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FitConfig {
    /// Span of the placeholder region shown before any marker exists.
    /// Default: 0.1.
    pub empty_span: f64,

    /// Span around a lone marker (street-level framing).  Default: 0.007.
    pub single_span: f64,

    /// Multiplier on the marker lat/lon range that leaves room around the
    /// outermost markers.  Default: 1.5.
    pub margin: f64,

    /// Smallest span per axis for two or more markers.  Keeps markers that
    /// share a latitude or longitude from producing a zero-area region.
    /// Default: 0.005.
    pub min_span: f64,

    /// Include the stored route polyline in the framed bounds, not only the
    /// markers.  Default: `false`.
    pub include_route: bool,
}

impl FitConfig {
    pub fn validate(&self) -> MapResult<()> {
        let spans = [
            ("empty_span", self.empty_span),
            ("single_span", self.single_span),
            ("min_span", self.min_span),
        ];
        for (name, v) in spans {
            if !v.is_finite() || v <= 0.0 {
                return Err(MapError::InvalidConfig(format!(
                    "{name} must be a positive number of degrees, got {v}"
                )));
            }
        }
        if !self.margin.is_finite() || self.margin < 1.0 {
            return Err(MapError::InvalidConfig(format!(
                "margin must be at least 1.0, got {}",
                self.margin
            )));
        }
        Ok(())
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            empty_span:    0.1,
            single_span:   0.007,
            margin:        1.5,
            min_span:      0.005,
            include_route: false,
        }
    }
}
