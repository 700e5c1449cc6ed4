//! Noise parameters bound to a single transform channel.
//!
//! A [`NoiseParameters`] value is what a host stores on a shake node: the
//! seed and shape of the noise plus per-axis strength and sign constraints.
//! It is a plain value type; the sampler copies it on construction.
//!
//! # Serialization
//!
//! Fields serialize in kebab-case and every field has a default, so hosts
//! can persist only the attributes a user actually changed:
//!
//! ```rust
//! use shake_core::NoiseParameters;
//!
//! let params: NoiseParameters = serde_json::from_str(r#"{ "seed": 7, "ramp-in": 12.0 }"#).unwrap();
//! assert_eq!(params.seed, 7);
//! assert_eq!(params.ramp_in, 12.0);
//! assert_eq!(params.frequency, 5.0);
//! ```
//!
//! # Domains
//!
//! | field        | domain        | out-of-domain handling |
//! |--------------|---------------|------------------------|
//! | `frequency`  | `> 0`         | rejected               |
//! | `roughness`  | `[0, 1]`      | clamped                |
//! | `ramp_in/out`| `>= 0`        | clamped                |
//! | `amplitude`  | `[0, 1]`      | clamped                |
//! | `strength`   | `>= 0`        | clamped                |
//!
//! Any NaN or infinity is rejected.

use crate::error::{Error, Result, ensure_finite};
use serde::{Deserialize, Serialize};

/// Frequency the editor assigns to newly created shakes.
pub const DEFAULT_FREQUENCY: f64 = 5.0;
/// Roughness the editor assigns to newly created shakes.
pub const DEFAULT_ROUGHNESS: f64 = 0.5;
/// Per-axis strength the editor assigns to newly created shakes.
pub const DEFAULT_STRENGTH: f64 = 5.0;

/// One of the three components of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X component.
    X,
    /// Y component.
    Y,
    /// Z component.
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index (0, 1, 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Strength and sign constraint for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AxisSettings {
    /// Peak displacement on this axis.
    pub strength: f64,
    /// Fold negative lobes so the output stays in `[0, strength]`.
    pub positive_only: bool,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            strength: DEFAULT_STRENGTH,
            positive_only: false,
        }
    }
}

impl AxisSettings {
    /// Creates settings with the given strength and sign constraint.
    pub fn new(strength: f64, positive_only: bool) -> Self {
        Self {
            strength,
            positive_only,
        }
    }

    /// Settings that produce no displacement.
    pub fn disabled() -> Self {
        Self::new(0.0, false)
    }
}

/// Shape and scale of the noise driving one transform channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct NoiseParameters {
    /// Selects the pseudo-random stream.
    pub seed: i32,
    /// Oscillations per time unit of the base octave.
    pub frequency: f64,
    /// Weight of each successive octave relative to the previous one.
    pub roughness: f64,
    /// Sum eight octaves instead of evaluating only the base one.
    pub fractal: bool,
    /// Fade-in duration from the start of the animation range.
    pub ramp_in: f64,
    /// Fade-out duration before the end of the animation range.
    pub ramp_out: f64,
    /// Overall level of the curve, applied on top of the ramps.
    pub amplitude: f64,
    /// X axis settings.
    pub x: AxisSettings,
    /// Y axis settings.
    pub y: AxisSettings,
    /// Z axis settings.
    pub z: AxisSettings,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: DEFAULT_FREQUENCY,
            roughness: DEFAULT_ROUGHNESS,
            fractal: true,
            ramp_in: 0.0,
            ramp_out: 0.0,
            amplitude: 1.0,
            x: AxisSettings::default(),
            y: AxisSettings::default(),
            z: AxisSettings::default(),
        }
    }
}

impl NoiseParameters {
    /// Default parameters with the given seed.
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Sets the same strength on every axis.
    pub fn with_strength(mut self, strength: f64) -> Self {
        for axis in Axis::ALL {
            self.axis_mut(axis).strength = strength;
        }
        self
    }

    /// Sets both ramp durations.
    pub fn with_ramps(mut self, ramp_in: f64, ramp_out: f64) -> Self {
        self.ramp_in = ramp_in;
        self.ramp_out = ramp_out;
        self
    }

    /// Settings of one axis.
    #[inline]
    pub fn axis(&self, axis: Axis) -> &AxisSettings {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Mutable settings of one axis.
    #[inline]
    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisSettings {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Checks the values that cannot be clamped into shape.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when `frequency <= 0` or any real field
    /// is NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("frequency", self.frequency)?;
        if self.frequency <= 0.0 {
            return Err(Error::invalid_parameter(
                "frequency",
                format!("must be positive, got {}", self.frequency),
            ));
        }
        ensure_finite("roughness", self.roughness)?;
        ensure_finite("ramp-in", self.ramp_in)?;
        ensure_finite("ramp-out", self.ramp_out)?;
        ensure_finite("amplitude", self.amplitude)?;
        ensure_finite("strength-x", self.x.strength)?;
        ensure_finite("strength-y", self.y.strength)?;
        ensure_finite("strength-z", self.z.strength)?;
        Ok(())
    }

    /// Validates, then clamps every remaining field into its domain.
    ///
    /// ```rust
    /// use shake_core::NoiseParameters;
    ///
    /// let mut params = NoiseParameters::default();
    /// params.roughness = 1.7;
    /// params.ramp_in = -3.0;
    /// let clean = params.sanitized().unwrap();
    /// assert_eq!(clean.roughness, 1.0);
    /// assert_eq!(clean.ramp_in, 0.0);
    /// ```
    pub fn sanitized(&self) -> Result<Self> {
        self.validate()?;
        let mut clean = *self;
        clean.roughness = clean.roughness.clamp(0.0, 1.0);
        clean.ramp_in = clean.ramp_in.max(0.0);
        clean.ramp_out = clean.ramp_out.max(0.0);
        clean.amplitude = clean.amplitude.clamp(0.0, 1.0);
        for axis in Axis::ALL {
            let settings = clean.axis_mut(axis);
            settings.strength = settings.strength.max(0.0);
        }
        Ok(clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_editor() {
        let p = NoiseParameters::default();
        assert_eq!(p.seed, 0);
        assert_eq!(p.frequency, 5.0);
        assert_eq!(p.roughness, 0.5);
        assert!(p.fractal);
        assert_eq!(p.amplitude, 1.0);
        for axis in Axis::ALL {
            assert_eq!(p.axis(axis).strength, 5.0);
            assert!(!p.axis(axis).positive_only);
        }
    }

    #[test]
    fn test_rejects_non_positive_frequency() {
        for f in [0.0, -1.0] {
            let p = NoiseParameters {
                frequency: f,
                ..Default::default()
            };
            let err = p.validate().unwrap_err();
            assert_eq!(err.parameter(), "frequency");
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut p = NoiseParameters::default();
        p.y.strength = f64::NAN;
        assert_eq!(p.validate().unwrap_err().parameter(), "strength-y");

        let p = NoiseParameters {
            ramp_out: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(p.sanitized().unwrap_err().parameter(), "ramp-out");
    }

    #[test]
    fn test_sanitized_clamps() {
        let mut p = NoiseParameters {
            roughness: -0.2,
            ramp_out: -1.0,
            amplitude: 4.0,
            ..Default::default()
        };
        p.z.strength = -2.0;
        let clean = p.sanitized().unwrap();
        assert_eq!(clean.roughness, 0.0);
        assert_eq!(clean.ramp_out, 0.0);
        assert_eq!(clean.amplitude, 1.0);
        assert_eq!(clean.z.strength, 0.0);
        assert_eq!(clean.x.strength, 5.0);
    }

    #[test]
    fn test_builders() {
        let p = NoiseParameters::with_seed(9).with_strength(2.5).with_ramps(4.0, 6.0);
        assert_eq!(p.seed, 9);
        assert_eq!(p.y.strength, 2.5);
        assert_eq!((p.ramp_in, p.ramp_out), (4.0, 6.0));
    }

    #[test]
    fn test_serde_kebab_case() {
        let mut p = NoiseParameters::with_seed(3);
        p.x.positive_only = true;
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"ramp-in\""));
        assert!(json.contains("\"positive-only\":true"));

        let back: NoiseParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_serde_partial_axis() {
        let p: NoiseParameters =
            serde_json::from_str(r#"{ "y": { "positive-only": true } }"#).unwrap();
        assert!(p.y.positive_only);
        assert_eq!(p.y.strength, DEFAULT_STRENGTH);
    }
}
