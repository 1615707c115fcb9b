/// Linear interpolation between `a` and `b` at `t` (not clamped).
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Wrap an angle in degrees into `[0, 360)`.
pub(crate) fn wrap_degrees(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if w >= 360.0 { 0.0 } else { w }
}

/// Replace non-finite values with `fallback`.
pub(crate) fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Format a number as a decimal string with at least one fractional digit (`45` -> `"45.0"`).
///
/// Negative zero is written as `"0.0"`.
pub(crate) fn format_decimal(v: f64) -> String {
    let s = (v + 0.0).to_string();
    if s.contains('.') || !v.is_finite() {
        s
    } else {
        format!("{s}.0")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
