//! Shared test utilities for the earth workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Known projection and overlay sets as the globe registers them
//! - Sample URL hashes and breakpoint lists
//! - Sample sweeps and temporary config files
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, unit_samples};
//! ```

pub mod files;
pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use files::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Asserts every RGB channel of a color lies within `[0, 255]`.
///
/// Works with any value exposing `r`, `g` and `b` integer fields.
#[macro_export]
macro_rules! assert_in_gamut {
    ($color:expr) => {{
        let c = $color;
        for (name, v) in [("r", c.r), ("g", c.g), ("b", c.b)] {
            if !(0..=255).contains(&v) {
                panic!("channel {} out of gamut: {} in {:?}", name, v, c);
            }
        }
    }};
}
