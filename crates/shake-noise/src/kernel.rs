//! One-dimensional seeded gradient noise.
//!
//! Each integer lattice point `i` gets a gradient `g(i)` in [-1, 1) drawn
//! from [`hash_signed`]. Between lattice points the contributions
//! `g(i) * f` and `g(i + 1) * (f - 1)` are blended with the quintic
//! [`fade`] curve, which makes the result C2-continuous in `x`.
//!
//! Gradient noise is zero on every lattice point. Sampling at whole
//! frames with a whole-number frequency would land exactly on those zeros,
//! so the domain is shifted by a seed-derived fraction in [0, 1).
//!
//! The raw 1-D blend peaks at ±0.5; the result is rescaled to [-1, 1].

use shake_math::{fade, hash_signed, hash_unit, lerp};

/// Lattice index reserved for the per-seed domain offset.
const OFFSET_INDEX: i64 = i64::MIN;

/// Gradient noise at `x` for the stream selected by `seed`.
///
/// ```rust
/// use shake_noise::kernel::gradient_noise;
///
/// let v = gradient_noise(42, 3.7);
/// assert!((-1.0..=1.0).contains(&v));
/// assert_eq!(v, gradient_noise(42, 3.7));
/// ```
#[inline]
pub fn gradient_noise(seed: u64, x: f64) -> f64 {
    let x = x + lattice_offset(seed);
    let cell = x.floor();
    let f = x - cell;
    let i = cell as i64;

    let g0 = hash_signed(seed, i);
    let g1 = hash_signed(seed, i.wrapping_add(1));

    (lerp(g0 * f, g1 * (f - 1.0), fade(f)) * 2.0).clamp(-1.0, 1.0)
}

/// Fractional shift of the lattice for `seed`.
#[inline]
pub fn lattice_offset(seed: u64) -> f64 {
    hash_unit(seed, OFFSET_INDEX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded() {
        for seed in 0..8 {
            for i in 0..2000 {
                let v = gradient_noise(seed, i as f64 * 0.037 - 30.0);
                assert!((-1.0..=1.0).contains(&v), "{v} out of range");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for i in 0..100 {
            let x = i as f64 * 0.731;
            assert_eq!(gradient_noise(7, x).to_bits(), gradient_noise(7, x).to_bits());
        }
    }

    #[test]
    fn test_continuous() {
        // Fine steps never jump: slope is bounded by the gradients and fade.
        let dx = 1e-4;
        let mut prev = gradient_noise(3, 0.0);
        for i in 1..50_000 {
            let v = gradient_noise(3, i as f64 * dx);
            assert!((v - prev).abs() < 1e-3, "jump at {}", i as f64 * dx);
            prev = v;
        }
    }

    #[test]
    fn test_zero_on_shifted_lattice() {
        let seed = 11;
        let offset = lattice_offset(seed);
        for i in -5..5 {
            // x + offset lands on an integer, where both contributions vanish
            let v = gradient_noise(seed, i as f64 + (1.0 - offset));
            assert!(v.abs() < 1e-9);
        }
    }

    #[test]
    fn test_not_stuck_at_zero_on_whole_numbers() {
        let nonzero = (0..100)
            .map(|i| gradient_noise(0, i as f64))
            .filter(|v| v.abs() > 1e-6)
            .count();
        assert!(nonzero > 90);
    }

    #[test]
    fn test_seeds_differ() {
        let a: Vec<f64> = (0..32).map(|i| gradient_noise(1, i as f64 * 0.3)).collect();
        let b: Vec<f64> = (0..32).map(|i| gradient_noise(2, i as f64 * 0.3)).collect();
        assert_ne!(a, b);
    }
}
