//! Octave summation over the gradient kernel.
//!
//! ```text
//! signal(t) = Σ r^k · n(seed_k, f · 2^k · t)  /  Σ r^k      k = 0..K
//! ```
//!
//! Dividing by the weight sum keeps the signal inside [-1, 1] for any
//! roughness. Octave `k` uses its own stream `seed_k`, with `seed_0` equal
//! to the base seed so that [`fractal_noise`] with `roughness = 0` is
//! exactly [`octave_noise`].

use crate::kernel::gradient_noise;

/// Upper bound on the number of summed octaves.
pub const OCTAVES: u32 = 8;

/// Octaves whose weight falls below this are skipped.
const MIN_WEIGHT: f64 = 1e-6;

/// Seed stride between octaves.
const OCTAVE_SEED_STRIDE: u64 = 31337;

/// Stream used by octave `octave` of `seed`.
#[inline]
pub fn octave_seed(seed: u64, octave: u32) -> u64 {
    seed.wrapping_add(u64::from(octave).wrapping_mul(OCTAVE_SEED_STRIDE))
}

/// Single-octave noise at time `t`.
///
/// Returns 0 when `frequency * t` overflows.
#[inline]
pub fn octave_noise(seed: u64, frequency: f64, t: f64) -> f64 {
    let x = frequency * t;
    if x.is_finite() {
        gradient_noise(seed, x)
    } else {
        0.0
    }
}

/// Normalized multi-octave noise at time `t`.
///
/// `roughness` is expected in [0, 1]. The loop stops early once an
/// octave's weight underflows [`MIN_WEIGHT`] or its scaled time is no
/// longer finite.
///
/// ```rust
/// use shake_noise::fractal::{fractal_noise, octave_noise};
///
/// assert_eq!(fractal_noise(5, 2.0, 0.0, 1.3), octave_noise(5, 2.0, 1.3));
/// ```
pub fn fractal_noise(seed: u64, frequency: f64, roughness: f64, t: f64) -> f64 {
    let mut total = 0.0;
    let mut norm = 0.0;
    let mut weight = 1.0;
    let mut freq = frequency;

    for octave in 0..OCTAVES {
        let x = freq * t;
        if !x.is_finite() {
            break;
        }
        total += weight * gradient_noise(octave_seed(seed, octave), x);
        norm += weight;

        weight *= roughness;
        freq *= 2.0;
        if weight < MIN_WEIGHT {
            break;
        }
    }

    if norm > 0.0 { total / norm } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_roughness_is_single_octave() {
        for i in 0..500 {
            let t = i as f64 * 0.173;
            assert_eq!(fractal_noise(9, 5.0, 0.0, t), octave_noise(9, 5.0, t));
        }
    }

    #[test]
    fn test_bounded_for_any_roughness() {
        for r in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for i in 0..1000 {
                let v = fractal_noise(4, 3.0, r, i as f64 * 0.05);
                assert!((-1.0..=1.0).contains(&v), "r={r}: {v}");
            }
        }
    }

    #[test]
    fn test_roughness_adds_detail() {
        // Higher octaves add short-scale variation: total variation grows.
        let variation = |r: f64| {
            (1..2000)
                .map(|i| {
                    let a = fractal_noise(2, 1.0, r, (i - 1) as f64 * 0.01);
                    let b = fractal_noise(2, 1.0, r, i as f64 * 0.01);
                    (b - a).abs()
                })
                .sum::<f64>()
        };
        assert!(variation(0.8) > variation(0.0));
    }

    #[test]
    fn test_octave_seeds_distinct() {
        let seeds: Vec<u64> = (0..OCTAVES).map(|k| octave_seed(0, k)).collect();
        assert_eq!(seeds[0], 0);
        for k in 1..seeds.len() {
            assert_ne!(seeds[k], seeds[k - 1]);
        }
    }

    #[test]
    fn test_overflowing_time() {
        assert_eq!(octave_noise(1, 5.0, f64::MAX), 0.0);
        let v = fractal_noise(1, 5.0, 0.5, f64::MAX / 8.0);
        assert!(v.is_finite());
    }
}
