//! Greyscale palette for wind particle trails.

use earth_common::{EarthError, EarthResult};
use tracing::debug;

use crate::color::as_color_style;

/// First channel value of the palette; dimmer greys are invisible on the globe.
const FIRST_CHANNEL: u32 = 85;
const LAST_CHANNEL: u32 = 255;

/// An ordered greyscale palette plus a bucketing of wind magnitudes onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct WindIntensityScale {
    styles: Vec<String>,
    max_value: f64,
}

impl WindIntensityScale {
    /// Builds styles for channel values `85, 85 + step, ...` up to 255 inclusive.
    ///
    /// # Errors
    /// `step` must be positive and `max_value` finite and positive.
    pub fn new(step: u32, max_value: f64) -> EarthResult<Self> {
        if step == 0 {
            return Err(EarthError::invalid_parameter("step", "must be positive"));
        }
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(EarthError::invalid_parameter(
                "max_value",
                format!("must be finite and positive, got {}", max_value),
            ));
        }

        let styles: Vec<String> = (FIRST_CHANNEL..=LAST_CHANNEL)
            .step_by(step as usize)
            .map(|j| {
                let j = j as f64;
                as_color_style(j, j, j, 1.0)
            })
            .collect();

        debug!(step, max_value, buckets = styles.len(), "Built wind intensity scale");
        Ok(Self { styles, max_value })
    }

    /// Palette index for a wind magnitude: `floor(min(m, max) / max * (len - 1))`.
    ///
    /// Magnitudes above `max_value` land in the last bucket. Negative or NaN
    /// magnitudes land in the first.
    pub fn index_for(&self, magnitude: f64) -> usize {
        if magnitude.is_nan() {
            return 0;
        }
        let last = (self.styles.len() - 1) as f64;
        (magnitude.min(self.max_value) / self.max_value * last).floor() as usize
    }

    /// Style string for a wind magnitude.
    pub fn style_for(&self, magnitude: f64) -> &str {
        &self.styles[self.index_for(magnitude)]
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }
}

/// Creates a wind intensity palette, see [`WindIntensityScale::new`].
pub fn wind_intensity_color_scale(step: u32, max_value: f64) -> EarthResult<WindIntensityScale> {
    WindIntensityScale::new(step, max_value)
}
