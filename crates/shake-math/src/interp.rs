//! Interpolation utilities for noise evaluation.
//!
//! - Linear interpolation ([`lerp`], [`inverse_lerp`])
//! - Clamping utilities ([`clamp`], [`saturate`])
//! - The quintic fade curve used between gradient lattice points ([`fade`])
//!
//! # Usage
//!
//! ```rust
//! use shake_math::{lerp, saturate, fade};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(saturate(1.5), 1.0);
//! assert_eq!(fade(0.5), 0.5);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Example
///
/// ```rust
/// use shake_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t`.
/// A degenerate span (`a == b`) returns 0.
///
/// ```rust
/// use shake_math::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
/// assert_eq!(inverse_lerp(3.0, 3.0, 5.0), 0.0);
/// ```
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < 1e-12 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Clamps a value to the range [min, max].
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Clamps a value to [0, 1].
#[inline]
pub fn saturate(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Ken Perlin's quintic fade curve on [0, 1].
///
/// `t * t * t * (t * (t * 6 - 15) + 10)`
///
/// First and second derivatives vanish at both ends, so gradient noise
/// built on it has no visible kinks at lattice points.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Fractional part, always in [0, 1).
#[inline]
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}
