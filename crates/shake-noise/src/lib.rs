//! # shake-noise
//!
//! Seeded fractal noise for shaking animated transforms.
//!
//! # Modules
//!
//! - [`kernel`] - 1-D seeded gradient noise
//! - [`fractal`] - roughness-weighted octave sum
//! - [`envelope`] - ramp-in / ramp-out fades over the animation range
//! - [`sampler`] - [`NoiseSampler`], the per-time displacement function
//! - [`preview`] - evenly spaced samples for a graph widget
//! - [`bake`] - sequential per-frame keying of base pose + noise
//!
//! # Example
//!
//! ```rust
//! use shake_core::{Channel, NoiseParameters, Pose, ShakeSet, TimeRange, TimeWindow};
//! use shake_noise::{BakeDriver, NoiseSampler, PreviewSampler};
//!
//! let params = NoiseParameters::with_seed(4).with_ramps(12.0, 12.0);
//! let window = TimeWindow::new(1.0, 120.0).unwrap();
//!
//! // Graph preview
//! let sampler = NoiseSampler::new(&params, window).unwrap();
//! let curve = PreviewSampler::new(300, 4, window).unwrap().sample(&sampler);
//! assert_eq!(curve.len(), 75);
//!
//! // Bake translate keys
//! let shakes = ShakeSet::default().with(Channel::Translate, params);
//! let range = TimeRange::new(1.0, 120.0, 1).unwrap();
//! let frames = BakeDriver::new(range, window, &shakes).unwrap().bake(&Pose::IDENTITY);
//! assert_eq!(frames.len(), 120);
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - [`PreviewSampler::sample_par`] via rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bake;
pub mod envelope;
pub mod fractal;
pub mod kernel;
pub mod preview;
pub mod sampler;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use bake::{BakeDriver, BakedFrame, Keyframe, KeyframeSink};
pub use envelope::Envelope;
pub use preview::{
    DEFAULT_PREVIEW_STEP, DEFAULT_TIME_SCALE, PreviewSample, PreviewSampler, SampleBuffer,
};
pub use sampler::{NoiseSampler, sample};
