//! # shake-core
//!
//! Core types for procedural shake noise on animated transforms.
//!
//! - [`NoiseParameters`], [`AxisSettings`], [`Axis`] - what a shake node stores
//! - [`TimeWindow`], [`TimeRange`] - animation range and stepped bake range
//! - [`Pose`], [`Channel`], [`ShakeSet`] - the transform a shake perturbs
//! - [`Error`], [`Result`] - parameter validation failures
//!
//! ## Crate Structure
//!
//! ```text
//! shake-core (this crate)
//!    ^
//!    |
//!    +-- shake-noise (sampler, preview, bake)
//!    +-- shake-cli
//! ```
//!
//! Host-side state (selection, attribute storage, the current frame) never
//! enters these types; a host passes it in explicitly.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod params;
pub mod pose;
pub mod time;

pub use error::{Error, Result};
pub use params::*;
pub use pose::*;
pub use time::*;

/// Re-export so hosts can build poses without naming `glam` themselves.
pub use glam::DVec3;
