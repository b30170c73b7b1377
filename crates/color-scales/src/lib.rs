//! Color scales for weather overlays and particle trails.
//!
//! Provides:
//! - Linear color interpolation between two RGB endpoints
//! - The sinebow spectrum and its fade-to-white extension
//! - Greyscale wind intensity palettes with magnitude bucketing
//! - Piecewise (segmented) scales built from value/color breakpoints
//! - Declarative scale definitions loaded from JSON or YAML

pub mod color;
pub mod definition;
pub mod interpolator;
pub mod segmented;
pub mod sinebow;
pub mod wind;

pub use color::{as_color_style, ColorScale, Rgb, Rgba};
pub use definition::{ScaleDefinition, ScaleSet};
pub use interpolator::{color_interpolator, ColorInterpolator};
pub use segmented::{segmented_color_scale, Breakpoint, SegmentedColorScale};
pub use sinebow::{extended_sinebow_color, sinebow_color, ExtendedSinebow, Sinebow};
pub use wind::{wind_intensity_color_scale, WindIntensityScale};
