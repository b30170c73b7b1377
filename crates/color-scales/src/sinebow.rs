//! The sinebow spectrum.
//!
//! A rainbow-like trefoil color space: not quite HSV, but it produces a pleasant
//! spectrum where hue 0 and hue 1 are distinct colors.

use std::f64::consts::TAU;

use crate::color::{ColorScale, Rgb, Rgba};
use crate::interpolator::color_interpolator;

/// Hue at which [`extended_sinebow_color`] stops following the spectrum and fades to white.
pub const BOUNDARY: f64 = 0.45;

const WHITE: Rgb = [255, 255, 255];

/// Maps `hue` in `[0, 1]` onto the sinebow curve. Alpha passes through.
pub fn sinebow_color(hue: f64, alpha: f64) -> Rgba {
    // Map hue [0, 1] to radians [0, 5/6 τ]; a full rotation would make 0 and 1 the same color.
    let mut rad = hue * TAU * 5.0 / 6.0;
    rad *= 0.75; // increase frequency to 2/3 cycle per rad

    let s = rad.sin();
    let c = rad.cos();
    let r = ((-c).max(0.0) * 255.0).floor() as i32;
    let g = (s.max(0.0) * 255.0).floor() as i32;
    let b = (c.max(0.0).max(-s) * 255.0).floor() as i32;
    Rgba::new(r, g, b, alpha)
}

/// Follows the sinebow for `i <= BOUNDARY` (rescaled to the full spectrum), then fades
/// from the final sinebow color to white as `i` goes from `BOUNDARY` to 1.
pub fn extended_sinebow_color(i: f64, alpha: f64) -> Rgba {
    if i <= BOUNDARY {
        return sinebow_color(i / BOUNDARY, alpha);
    }
    let last = sinebow_color(1.0, 0.0).rgb();
    let fade = (i - BOUNDARY) / (1.0 - BOUNDARY);
    color_interpolator(last, WHITE).at(fade, alpha)
}

/// [`sinebow_color`] as a [`ColorScale`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Sinebow;

impl ColorScale for Sinebow {
    fn color(&self, point: f64, alpha: f64) -> Rgba {
        sinebow_color(point, alpha)
    }
}

/// [`extended_sinebow_color`] as a [`ColorScale`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedSinebow;

impl ColorScale for ExtendedSinebow {
    fn color(&self, point: f64, alpha: f64) -> Rgba {
        extended_sinebow_color(point, alpha)
    }
}
