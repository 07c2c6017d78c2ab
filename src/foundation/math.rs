pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `v` between `start` and `end`, clamped to `[0, 1]`.
///
/// An empty span reports `1.0` once `v` reaches it and `0.0` before.
pub fn progress_between(v: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span.abs() <= f64::EPSILON {
        return if v >= start { 1.0 } else { 0.0 };
    }
    ((v - start) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
