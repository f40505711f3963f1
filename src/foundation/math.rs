pub(crate) fn clamp01(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Position of `v` within `[a, b]` as a fraction; degenerate ranges snap to 0 or 1.
pub(crate) fn inverse_lerp(a: f64, b: f64, v: f64) -> f64 {
    let span = b - a;
    if span.abs() <= f64::EPSILON {
        return if v >= b { 1.0 } else { 0.0 };
    }
    (v - a) / span
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
