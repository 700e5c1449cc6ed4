//! Time windows and stepped time ranges.
//!
//! - [`TimeWindow`] - the animation range an envelope is anchored to
//! - [`TimeRange`] - a window plus an integer stride, visited by baking
//! - [`Frames`] - iterator over the sample times of a [`TimeRange`]
//!
//! # Example
//!
//! ```rust
//! use shake_core::TimeRange;
//!
//! let range = TimeRange::new(0.0, 10.0, 5).unwrap();
//! let times: Vec<f64> = range.frames().collect();
//! assert_eq!(times, vec![0.0, 5.0, 10.0]);
//! ```
//!
//! Times are computed as `start + i * step` rather than by repeated
//! addition, so long ranges do not drift.

use crate::error::{Error, Result, ensure_finite};
use serde::{Deserialize, Serialize};

/// Slack absorbed when deciding whether `end` lands on the step grid.
const GRID_EPSILON: f64 = 1e-9;

/// Spans above this can no longer be counted exactly in an `f64`.
const MAX_SPANS: f64 = 9_007_199_254_740_992.0; // 2^53

/// Closed time interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First time of the window.
    pub start: f64,
    /// Last time of the window.
    pub end: f64,
}

impl TimeWindow {
    /// Creates a validated window.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when either bound is not finite or
    /// `end < start`. A zero-length window is allowed.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    /// Window spanning `width / time_scale` time units from zero.
    ///
    /// `time_scale` is the number of pixels per time unit of a preview
    /// graph `width` pixels wide.
    ///
    /// ```rust
    /// use shake_core::TimeWindow;
    ///
    /// let window = TimeWindow::from_time_scale(400, 20.0).unwrap();
    /// assert_eq!(window.duration(), 20.0);
    /// ```
    pub fn from_time_scale(width: u32, time_scale: f64) -> Result<Self> {
        ensure_finite("time-scale", time_scale)?;
        if time_scale <= 0.0 {
            return Err(Error::invalid_parameter(
                "time-scale",
                format!("must be positive, got {time_scale}"),
            ));
        }
        Self::new(0.0, f64::from(width) / time_scale)
    }

    /// Re-checks a window built from public fields.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("start", self.start)?;
        ensure_finite("end", self.end)?;
        if self.end < self.start {
            return Err(Error::invalid_parameter(
                "end",
                format!("{} is before start {}", self.end, self.start),
            ));
        }
        Ok(())
    }

    /// Length of the window.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// True when `t` lies inside the closed window.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }

    /// Clamps `t` into the window.
    #[inline]
    pub fn clamp(&self, t: f64) -> f64 {
        t.max(self.start).min(self.end)
    }
}

/// Ordered sample times `start, start + step, ...` up to `end`.
///
/// `end` is included when it falls on the step grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// First sample time.
    pub start: f64,
    /// Last admissible sample time.
    pub end: f64,
    /// Stride between samples, in whole time units.
    pub step: i64,
}

impl TimeRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when `step <= 0`, `end < start`, a
    /// bound is not finite, or the range holds more frames than can be
    /// counted.
    ///
    /// ```rust
    /// use shake_core::TimeRange;
    ///
    /// assert!(TimeRange::new(0.0, 10.0, 0).is_err());
    /// assert!(TimeRange::new(10.0, 0.0, 1).is_err());
    /// assert!(TimeRange::new(0.0, 1e20, 1).is_err());
    /// ```
    pub fn new(start: f64, end: f64, step: i64) -> Result<Self> {
        let range = Self { start, end, step };
        range.validate()?;
        Ok(range)
    }

    /// Re-checks a range built from public fields.
    pub fn validate(&self) -> Result<()> {
        if self.step <= 0 {
            return Err(Error::invalid_parameter(
                "step",
                format!("must be positive, got {}", self.step),
            ));
        }
        self.window().validate()?;
        if self.frame_count().is_none() {
            return Err(Error::invalid_parameter(
                "end",
                format!("too many frames from {} to {} by {}", self.start, self.end, self.step),
            ));
        }
        Ok(())
    }

    /// The `[start, end]` window covered by the range.
    #[inline]
    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.start,
            end: self.end,
        }
    }

    /// Number of sample times.
    ///
    /// Zero for a range that does not validate.
    pub fn len(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        self.frame_count().unwrap_or(0)
    }

    /// Frame count of a range with valid step and window, or `None` when
    /// it does not fit in `usize`.
    fn frame_count(&self) -> Option<usize> {
        let spans = ((self.end - self.start) / self.step as f64 + GRID_EPSILON).floor();
        if !(0.0..MAX_SPANS).contains(&spans) {
            return None;
        }
        usize::try_from(spans as u64).ok()?.checked_add(1)
    }

    /// True when the range yields no sample times.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the sample times in increasing order.
    pub fn frames(&self) -> Frames {
        Frames {
            start: self.start,
            step: self.step as f64,
            index: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for &TimeRange {
    type Item = f64;
    type IntoIter = Frames;

    fn into_iter(self) -> Frames {
        self.frames()
    }
}

/// Iterator over the sample times of a [`TimeRange`].
#[derive(Debug, Clone)]
pub struct Frames {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Iterator for Frames {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            return None;
        }
        let t = self.start + self.index as f64 * self.step;
        self.index += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames {}
