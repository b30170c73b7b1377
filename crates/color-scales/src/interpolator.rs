//! Linear interpolation between two colors.

use crate::color::{ColorScale, Rgb, Rgba};

/// Interpolates per channel from `start` (t = 0) to `end` (t = 1).
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate past the endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorInterpolator {
    start: Rgb,
    delta: [f64; 3],
}

impl ColorInterpolator {
    pub fn new(start: Rgb, end: Rgb) -> Self {
        Self {
            start,
            delta: [
                (end[0] - start[0]) as f64,
                (end[1] - start[1]) as f64,
                (end[2] - start[2]) as f64,
            ],
        }
    }

    pub fn start(&self) -> Rgb {
        self.start
    }

    /// Color at position `t`, each channel `floor(start + t * (end - start))`.
    #[inline]
    pub fn at(&self, t: f64, alpha: f64) -> Rgba {
        let channel = |i: usize| (self.start[i] as f64 + t * self.delta[i]).floor() as i32;
        Rgba::new(channel(0), channel(1), channel(2), alpha)
    }
}

impl ColorScale for ColorInterpolator {
    fn color(&self, point: f64, alpha: f64) -> Rgba {
        self.at(point, alpha)
    }
}

/// Creates an interpolator between two colors.
pub fn color_interpolator(start: Rgb, end: Rgb) -> ColorInterpolator {
    ColorInterpolator::new(start, end)
}
