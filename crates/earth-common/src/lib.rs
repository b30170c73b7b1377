//! Common types and utilities shared across the earth front-end crates.

pub mod device;
pub mod error;
pub mod format;
pub mod math;
pub mod time;

pub use device::{is_firefox, DeviceClass};
pub use error::{EarthError, EarthResult};
pub use format::{format_coordinates, format_scalar, format_vector, Units};
pub use math::{clamp, distance, floor_mod, proportion, spread, Point};
pub use time::DateConfig;
