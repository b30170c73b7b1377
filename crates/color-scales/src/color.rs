//! Color values and the scale trait.

use serde::{Deserialize, Serialize};

/// An RGB triple. Channels are integral and normally within `[0, 255]`, but nothing
/// here clamps them; extrapolating scales may produce out-of-gamut values.
pub type Rgb = [i32; 3];

/// An RGB color with an alpha channel.
///
/// Alpha is opaque to this crate: callers use `[0, 255]` or `[0, 1]` as suits the
/// call site and it is passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: i32, g: i32, b: i32, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(rgb: Rgb, a: f64) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    pub const fn rgb(&self) -> Rgb {
        [self.r, self.g, self.b]
    }

    /// Saturating conversion for 8-bit raster buffers. Alpha is read as `[0, 255]`.
    pub fn to_bytes(&self) -> [u8; 4] {
        let channel = |v: i32| v.clamp(0, 255) as u8;
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a.round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// CSS style string, see [`as_color_style`].
    pub fn to_style(&self) -> String {
        as_color_style(self.r as f64, self.g as f64, self.b as f64, self.a)
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(c: Rgba) -> Self {
        [c.r as f64, c.g as f64, c.b as f64, c.a]
    }
}

/// Formats `"rgba(r, g, b, a)"` with the literal spacing consumers compare against.
///
/// Numbers use their shortest form, so `1.0` renders as `1`.
pub fn as_color_style(r: f64, g: f64, b: f64, a: f64) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, a)
}

/// Maps a sample and an alpha to a color.
///
/// The renderer calls this once per pixel or particle, so implementations do no allocation.
pub trait ColorScale: Send + Sync {
    fn color(&self, point: f64, alpha: f64) -> Rgba;
}

impl<F> ColorScale for F
where
    F: Fn(f64, f64) -> Rgba + Send + Sync,
{
    fn color(&self, point: f64, alpha: f64) -> Rgba {
        self(point, alpha)
    }
}
