//! Piecewise linear color scales.

use earth_common::{proportion, EarthError, EarthResult};
use tracing::debug;

use crate::color::{ColorScale, Rgb, Rgba};
use crate::interpolator::ColorInterpolator;

/// One knot of a segmented scale: the sample value and the color at that value.
pub type Breakpoint = (f64, Rgb);

#[derive(Debug, Clone, PartialEq)]
struct Segment {
    low: f64,
    high: f64,
    lerp: ColorInterpolator,
}

/// A color scale composed of linear segments between adjacent breakpoints.
///
/// For example `[(0, [128, 0, 128]), (1, [255, 255, 0])]` runs from purple to yellow.
/// Samples outside the first and last breakpoint values take the endpoint colors.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedColorScale {
    first: Breakpoint,
    last: Breakpoint,
    segments: Vec<Segment>,
}

impl SegmentedColorScale {
    /// # Errors
    /// Requires at least two breakpoints with finite, non-decreasing values.
    pub fn new(breakpoints: &[Breakpoint]) -> EarthResult<Self> {
        if breakpoints.len() < 2 {
            return Err(EarthError::InvalidScale(format!(
                "segmented scale needs at least 2 breakpoints, got {}",
                breakpoints.len()
            )));
        }
        if let Some((value, _)) = breakpoints.iter().find(|(v, _)| !v.is_finite()) {
            return Err(EarthError::InvalidScale(format!(
                "breakpoint value {} is not finite",
                value
            )));
        }
        if let Some(pair) = breakpoints.windows(2).find(|w| w[1].0 < w[0].0) {
            return Err(EarthError::InvalidScale(format!(
                "breakpoint values must be non-decreasing, {} follows {}",
                pair[1].0, pair[0].0
            )));
        }

        let segments: Vec<Segment> = breakpoints
            .windows(2)
            .map(|w| Segment {
                low: w[0].0,
                high: w[1].0,
                lerp: ColorInterpolator::new(w[0].1, w[1].1),
            })
            .collect();

        let first = breakpoints[0];
        let last = breakpoints[breakpoints.len() - 1];
        debug!(
            segments = segments.len(),
            low = first.0,
            high = last.0,
            "Built segmented color scale"
        );
        Ok(Self {
            first,
            last,
            segments,
        })
    }

    /// The scale's domain, `(first value, last value)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.first.0, self.last.0)
    }

    /// Color for `point`, with `alpha` substituted.
    pub fn at(&self, point: f64, alpha: f64) -> Rgba {
        if point <= self.first.0 {
            return Rgba::from_rgb(self.first.1, alpha);
        }
        if point >= self.last.0 {
            return Rgba::from_rgb(self.last.1, alpha);
        }
        // First match wins, so zero-width segments are never selected.
        let segment = self
            .segments
            .iter()
            .find(|s| point <= s.high)
            .unwrap_or(&self.segments[self.segments.len() - 1]);
        segment
            .lerp
            .at(proportion(point, segment.low, segment.high), alpha)
    }
}

impl ColorScale for SegmentedColorScale {
    fn color(&self, point: f64, alpha: f64) -> Rgba {
        self.at(point, alpha)
    }
}

/// Creates a segmented scale, see [`SegmentedColorScale::new`].
pub fn segmented_color_scale(breakpoints: &[Breakpoint]) -> EarthResult<SegmentedColorScale> {
    SegmentedColorScale::new(breakpoints)
}
