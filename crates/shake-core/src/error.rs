//! Error types for shake operations.
//!
//! Every failure the core can report is a caller mistake detected before
//! any sampling happens: a non-positive frequency, a non-positive bake
//! step, an inverted time range, or a non-finite real. Values that are
//! merely outside their useful domain (roughness above 1, negative ramps,
//! negative strengths) are clamped instead and never reach this module.
//!
//! # Usage
//!
//! ```rust
//! use shake_core::{Error, Result};
//!
//! fn check_step(step: i64) -> Result<()> {
//!     if step <= 0 {
//!         return Err(Error::invalid_parameter("step", format!("{step} is not positive")));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_step(0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::NoiseParameters::validate`]
//! - [`crate::TimeWindow`] and [`crate::TimeRange`] validation
//! - `shake-noise` - sampler, preview and bake construction

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring shake evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A parameter is outside the domain the sampler can work with.
    ///
    /// Raised for `frequency <= 0`, `step <= 0`, `end < start` and any
    /// NaN or infinite real. Nothing is sampled or written once this is
    /// returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shake_core::Error;
    ///
    /// let err = Error::invalid_parameter("frequency", "must be positive, got 0");
    /// assert!(err.to_string().contains("frequency"));
    /// ```
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the parameter that caused the error.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

/// Rejects NaN and infinities.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_parameter(name, format!("{value} is not finite")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_parameter() {
        let err = Error::invalid_parameter("step", "0 is not positive");
        assert_eq!(err.to_string(), "invalid parameter `step`: 0 is not positive");
        assert_eq!(err.parameter(), "step");
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("t", 1.0).is_ok());
        assert!(ensure_finite("t", f64::NAN).is_err());
        assert_eq!(
            ensure_finite("t", f64::INFINITY).unwrap_err().parameter(),
            "t"
        );
    }
}
