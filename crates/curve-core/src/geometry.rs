// File: crates/curve-core/src/geometry.rs
// Summary: Lightweight geometry and number helpers for pixel math.

use crate::types::ScaledPoint;

/// Euclidean distance between two pixel points.
#[inline]
pub fn distance(a: ScaledPoint, b: ScaledPoint) -> f64 {
    distance_sq(a, b).sqrt()
}

#[inline]
pub fn distance_sq(a: ScaledPoint, b: ScaledPoint) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Point reflection of `a` across `center`.
#[inline]
pub fn symmetric(a: ScaledPoint, center: ScaledPoint) -> ScaledPoint {
    ScaledPoint::new(2.0 * center.x - a.x, 2.0 * center.y - a.y)
}

/// Midpoint of two scalars, independent of argument order.
#[inline]
pub fn middle(a: f64, b: f64) -> f64 {
    a.min(b) + (a - b).abs() / 2.0
}

/// Round to one decimal place, halves toward positive infinity.
#[inline]
pub fn round_tenth(v: f64) -> f64 {
    (v * 10.0 + 0.5).floor() / 10.0
}

/// Magnitudes at or above this switch to exponent notation.
const EXP_UPPER: f64 = 1e21;
/// Magnitudes below this switch to exponent notation.
const EXP_LOWER: f64 = 1e-6;

/// Text form of a number as it appears on a label: integral values carry no
/// fractional part, everything else uses the shortest round-trip digits.
/// Very large or very small magnitudes use exponent form with a signed
/// exponent, e.g. `1e+21` or `1.5e-7`.
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        // covers -0.0
        return "0".to_string();
    }
    let abs = v.abs();
    if abs.is_finite() && (abs >= EXP_UPPER || abs < EXP_LOWER) {
        let text = format!("{v:e}");
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        };
    }
    format!("{v}")
}

/// Character count of the label text for `v` (sign and decimal point included).
#[inline]
pub fn magnitude(v: f64) -> usize {
    format_number(v).len()
}
