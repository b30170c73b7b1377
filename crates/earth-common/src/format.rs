//! Human readable formatting for coordinates, scalars and wind vectors.

use std::f64::consts::TAU;

/// Every finite `f64` has a binary fraction whose decimal expansion ends within 1074 digits.
const EXACT_DIGITS: usize = 1075;

/// A display unit: how to convert a raw value and how many decimals to show.
#[derive(Debug, Clone, Copy)]
pub struct Units {
    pub label: &'static str,
    pub conversion: fn(f64) -> f64,
    pub precision: usize,
}

impl Units {
    pub const fn new(label: &'static str, conversion: fn(f64) -> f64, precision: usize) -> Self {
        Self {
            label,
            conversion,
            precision,
        }
    }
}

/// Formats `x` with exactly `digits` decimals, rounding exact ties away from zero.
///
/// `format!("{:.N}")` rounds ties to even, which turns `0.125` into `"0.12"`. Labels round
/// ties up instead, so `0.125` becomes `"0.13"`. Values that merely print like a tie
/// (`1.005` is stored as `1.00499...`) still round down.
pub fn to_fixed(x: f64, digits: usize) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let sign = if x < 0.0 { "-" } else { "" };
    let magnitude = x.abs();

    let exact = format!("{:.*}", digits + EXACT_DIGITS, magnitude);
    let (head, tail) = exact.split_at(exact.len() - EXACT_DIGITS);
    let tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !tie {
        return format!("{}{:.*}", sign, digits, magnitude);
    }

    let head = head.strip_suffix('.').unwrap_or(head);
    format!("{}{}", sign, increment_last_digit(head))
}

/// Adds one unit in the last place of a plain decimal string, carrying through `9`s.
fn increment_last_digit(decimal: &str) -> String {
    let mut bytes = decimal.as_bytes().to_vec();
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'.' => continue,
            b'9' => bytes[i] = b'0',
            d => {
                bytes[i] = d + 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// Formats a longitude/latitude pair, e.g. `"26.50° N, 153.00° W"`.
pub fn format_coordinates(lambda: f64, phi: f64) -> String {
    format!(
        "{}° {}, {}° {}",
        to_fixed(phi.abs(), 2),
        if phi >= 0.0 { "N" } else { "S" },
        to_fixed(lambda.abs(), 2),
        if lambda >= 0.0 { "E" } else { "W" }
    )
}

/// Formats a scalar in the given units.
pub fn format_scalar(value: f64, units: &Units) -> String {
    to_fixed((units.conversion)(value), units.precision)
}

/// Formats a rectangular wind vector `[u, v, magnitude]` as `"<deg>° @ <magnitude>"`.
///
/// The direction is the cardinal direction the wind blows from, rounded to the nearest 5°.
pub fn format_vector(wind: [f64; 3], units: &Units) -> String {
    let d = (-wind[0]).atan2(-wind[1]) / TAU * 360.0;
    let wd = (((d + 360.0) % 360.0) / 5.0).round() * 5.0;
    format!("{}° @ {}", to_fixed(wd, 0), format_scalar(wind[2], units))
}
