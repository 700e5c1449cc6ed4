//! # shake-math
//!
//! Scalar math used by the shake noise generator.
//!
//! - Interpolation utilities ([`lerp`], [`inverse_lerp`], [`saturate`], [`fade`])
//! - Seeded integer hashing ([`hash64`], [`hash_signed`], [`hash_unit`])
//!
//! Everything here works on `f64` so sample times in long animation ranges
//! keep their sub-frame precision.
//!
//! # Usage
//!
//! ```rust
//! use shake_math::{hash_signed, lerp};
//!
//! let a = hash_signed(7, 10);
//! let b = hash_signed(7, 11);
//! let mid = lerp(a, b, 0.5);
//! assert!(mid.abs() <= 1.0);
//! ```
//!
//! # Used By
//!
//! - `shake-noise` - gradient kernel, fractal sum and envelope

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod hash;
mod interp;

pub use hash::*;
pub use interp::*;
