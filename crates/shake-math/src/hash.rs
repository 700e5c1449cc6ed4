//! Seeded integer hashing.
//!
//! The noise kernel needs a random value per lattice point that depends
//! only on `(seed, lattice index)`. Nothing here touches process-global
//! random state, so the same inputs hash identically in every process and
//! on every platform.
//!
//! The mixer is the SplitMix64 finalizer applied to the seed combined with
//! the golden-ratio-scaled lattice index.

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_2: u64 = 0x94D0_49BB_1331_11EB;

/// 2^-53, maps the top 53 bits of a hash onto [0, 1).
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Hashes a lattice index under a seed.
///
/// ```rust
/// use shake_math::hash64;
///
/// assert_eq!(hash64(1, 42), hash64(1, 42));
/// assert_ne!(hash64(1, 42), hash64(2, 42));
/// ```
#[inline]
pub fn hash64(seed: u64, x: i64) -> u64 {
    let mut z = seed ^ (x as u64).wrapping_mul(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(MIX_1);
    z = (z ^ (z >> 27)).wrapping_mul(MIX_2);
    z ^ (z >> 31)
}

/// Hash mapped to [0, 1).
#[inline]
pub fn hash_unit(seed: u64, x: i64) -> f64 {
    (hash64(seed, x) >> 11) as f64 * UNIT_SCALE
}

/// Hash mapped to [-1, 1).
#[inline]
pub fn hash_signed(seed: u64, x: i64) -> f64 {
    hash_unit(seed, x) * 2.0 - 1.0
}

/// Widens a user-facing `i32` seed into the hash domain.
///
/// Negative seeds are sign-extended, so `-1` and `u32::MAX` as `i32` stay
/// distinct from their positive neighbours.
#[inline]
pub fn seed_key(seed: i32) -> u64 {
    seed as i64 as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        for x in -50..50 {
            assert_eq!(hash64(12345, x), hash64(12345, x));
        }
    }

    #[test]
    fn test_hash_varies_with_index() {
        let values: Vec<u64> = (0..64).map(|x| hash64(0, x)).collect();
        for (i, a) in values.iter().enumerate() {
            for b in &values[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unit_range() {
        for x in -1000..1000 {
            let u = hash_unit(99, x);
            assert!((0.0..1.0).contains(&u), "{u} out of [0, 1)");
            let s = hash_signed(99, x);
            assert!((-1.0..1.0).contains(&s), "{s} out of [-1, 1)");
        }
    }

    #[test]
    fn test_signed_mean_near_zero() {
        let n = 10_000;
        let mean: f64 = (0..n).map(|x| hash_signed(3, x)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean {mean} is biased");
    }

    #[test]
    fn test_seed_key_sign_extension() {
        assert_eq!(seed_key(0), 0);
        assert_eq!(seed_key(-1), u64::MAX);
        assert_ne!(seed_key(-1), seed_key(1));
    }
}
