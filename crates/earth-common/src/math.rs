//! Small numeric helpers shared by the color scales and the globe math.

/// A point in screen space, `[x, y]`.
pub type Point = [f64; 2];

/// Remainder of floored division, i.e. `a - n * floor(a / n)`.
///
/// Unlike `%`, the result takes the sign of `n`, so negative inputs wrap
/// consistently. The result is always within `[0, n)` for positive `n`.
pub fn floor_mod(a: f64, n: f64) -> f64 {
    let f = a - n * (a / n).floor();
    // a extremely close to a multiple of n (e.g. a = -1e-16, n = 10) rounds up to n
    if f == n {
        0.0
    } else {
        f
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx * dx + dy * dy).sqrt()
}

/// The value `x` clamped to `[low, high]`.
///
/// Written as `max(low, min(x, high))` rather than `f64::clamp`, which panics
/// when `low > high`.
pub fn clamp(x: f64, low: f64, high: f64) -> f64 {
    low.max(x.min(high))
}

/// Fraction of the bounds `[low, high]` covered by `x`, after clamping `x` to the bounds.
///
/// For bounds `[10, 20]` this returns 1 for `x >= 20`, 0.5 for `x = 15` and 0 for `x <= 10`.
pub fn proportion(x: f64, low: f64, high: f64) -> f64 {
    (clamp(x, low, high) - low) / (high - low)
}

/// The value `p` in `[0, 1]` scaled to the range `[low, high]`.
pub fn spread(p: f64, low: f64, high: f64) -> f64 {
    p * (high - low) + low
}
