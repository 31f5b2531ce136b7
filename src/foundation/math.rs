use std::f64::consts::PI;

/// Linear interpolation; `t` is not clamped.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Raised-cosine ease-in-out: slow at both ends, fastest at `t = 0.5`.
pub fn ease_in_out(t: f64) -> f64 {
    0.5 * (1.0 - (PI * t).cos())
}

/// Clamp into `[0, 1]`, mapping NaN to `0`.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
