//! The shake sampler: seeded fractal signal, envelope and per-axis scaling.
//!
//! [`NoiseSampler`] is built once from [`NoiseParameters`] and the
//! animation [`TimeWindow`]; construction is where validation and clamping
//! happen. After that, [`NoiseSampler::sample`] is a pure function of `t`:
//! the same sampler returns bit-identical output for the same time, so
//! scrubbing a preview and baking a frame never disagree.
//!
//! # Pipeline
//!
//! ```text
//! t ──► signal(t) ──► × envelope(t) × amplitude ──► clamp [-1, 1] = curve(t)
//!                                                        │
//!                           ┌────────────────────────────┼───────────────┐
//!                           ▼                            ▼               ▼
//!                    x: strength·curve         y: strength·|curve|      z ...
//!                                               (positive-only)
//! ```
//!
//! # Example
//!
//! ```rust
//! use shake_core::{NoiseParameters, TimeWindow};
//! use shake_noise::NoiseSampler;
//!
//! let window = TimeWindow::new(0.0, 100.0).unwrap();
//! let sampler = NoiseSampler::new(&NoiseParameters::default(), window).unwrap();
//!
//! let offset = sampler.sample(50.0);
//! assert!(offset.x.abs() <= 5.0);
//! assert_eq!(offset, sampler.sample(50.0));
//! ```

use crate::envelope::Envelope;
use crate::fractal::{fractal_noise, octave_noise};
use glam::DVec3;
use shake_core::{Axis, AxisSettings, Error, NoiseParameters, Result, TimeWindow};
use shake_math::seed_key;
use tracing::{debug, trace, warn};

/// Evaluates one shake over time.
///
/// Holds the sanitized parameters, so it is cheap to copy and safe to
/// share between a redraw path and a bake loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseSampler {
    params: NoiseParameters,
    seed: u64,
    window: TimeWindow,
    envelope: Envelope,
}

impl NoiseSampler {
    /// Validates `params` and `window` and prepares a sampler.
    ///
    /// Out-of-domain roughness, ramps, amplitude and strengths are clamped.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for `frequency <= 0`, an inverted
    /// window, or any non-finite real.
    pub fn new(params: &NoiseParameters, window: TimeWindow) -> Result<Self> {
        window.validate()?;
        let clean = params.sanitized()?;
        if clean != *params {
            debug!(?params, ?clean, "clamped shake parameters into range");
        }
        if clean.ramp_in + clean.ramp_out > window.duration() {
            warn!(
                ramp_in = clean.ramp_in,
                ramp_out = clean.ramp_out,
                duration = window.duration(),
                "ramps overlap the animation range"
            );
        }

        Ok(Self {
            params: clean,
            seed: seed_key(clean.seed),
            window,
            envelope: Envelope::new(window, clean.ramp_in, clean.ramp_out),
        })
    }

    /// Parameters after clamping.
    pub fn params(&self) -> &NoiseParameters {
        &self.params
    }

    /// Animation window the envelope is anchored to.
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Envelope with its effective ramp durations.
    pub fn envelope_shape(&self) -> &Envelope {
        &self.envelope
    }

    /// Raw noise signal in [-1, 1], before the envelope.
    #[inline]
    pub fn signal(&self, t: f64) -> f64 {
        let p = &self.params;
        if p.fractal {
            fractal_noise(self.seed, p.frequency, p.roughness, t)
        } else {
            octave_noise(self.seed, p.frequency, t)
        }
    }

    /// Envelope factor in [0, 1].
    #[inline]
    pub fn envelope(&self, t: f64) -> f64 {
        self.envelope.at(t)
    }

    /// Unit-strength curve in [-1, 1]: signal shaped by envelope and amplitude.
    ///
    /// This is the line a preview graph draws.
    #[inline]
    pub fn curve(&self, t: f64) -> f64 {
        (self.signal(t) * self.envelope(t) * self.params.amplitude).clamp(-1.0, 1.0)
    }

    /// Displacement on a single axis.
    #[inline]
    pub fn axis(&self, axis: Axis, t: f64) -> f64 {
        if !t.is_finite() {
            return 0.0;
        }
        rectify(self.params.axis(axis), self.curve(t))
    }

    /// Displacement on all three axes.
    ///
    /// A non-finite `t` yields zero displacement.
    #[inline]
    pub fn sample(&self, t: f64) -> DVec3 {
        if !t.is_finite() {
            trace!(t, "non-finite sample time");
            return DVec3::ZERO;
        }
        let unit = self.curve(t);
        DVec3::new(
            rectify(&self.params.x, unit),
            rectify(&self.params.y, unit),
            rectify(&self.params.z, unit),
        )
    }
}

/// Scales a unit curve value by an axis strength.
///
/// Positive-only axes fold negative lobes up (`|unit|`), which is
/// continuous and keeps the output in `[0, strength]`.
#[inline]
fn rectify(settings: &AxisSettings, unit: f64) -> f64 {
    if settings.positive_only {
        unit.abs() * settings.strength
    } else {
        unit * settings.strength
    }
}

/// One-shot evaluation of a shake at time `t`.
///
/// The portable form of the host's per-frame shake evaluation: validates
/// everything, then samples once.
///
/// ```rust
/// use shake_core::{NoiseParameters, TimeWindow};
///
/// let params = NoiseParameters::default().with_ramps(10.0, 0.0);
/// let window = TimeWindow::new(0.0, 100.0).unwrap();
/// let offset = shake_noise::sample(&params, window, 0.0).unwrap();
/// assert_eq!(offset, glam::DVec3::ZERO);
/// ```
///
/// # Errors
///
/// [`Error::InvalidParameter`] for invalid parameters, window, or a
/// non-finite `t`.
pub fn sample(params: &NoiseParameters, window: TimeWindow, t: f64) -> Result<DVec3> {
    if !t.is_finite() {
        return Err(Error::invalid_parameter("t", format!("{t} is not finite")));
    }
    Ok(NoiseSampler::new(params, window)?.sample(t))
}
