//! Ramp-in / ramp-out envelope over an animation window.
//!
//! ```text
//!  1 |      ____________
//!    |     /            \
//!    |    /              \
//!  0 |___/                \___
//!       start  +in   -out  end
//! ```
//!
//! The two ramps are independent linear fades multiplied together. Each
//! ramp is clamped to the window duration on its own; when they overlap
//! the product dips below 1 in the middle but never goes negative.

use shake_core::TimeWindow;
use shake_math::saturate;

/// Envelope anchored to an animation window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    start: f64,
    end: f64,
    ramp_in: f64,
    ramp_out: f64,
}

impl Envelope {
    /// Creates an envelope, clamping both ramps to `[0, window.duration()]`.
    pub fn new(window: TimeWindow, ramp_in: f64, ramp_out: f64) -> Self {
        let duration = window.duration().max(0.0);
        Self {
            start: window.start,
            end: window.end,
            ramp_in: ramp_in.max(0.0).min(duration),
            ramp_out: ramp_out.max(0.0).min(duration),
        }
    }

    /// Effective ramp-in duration.
    pub fn ramp_in(&self) -> f64 {
        self.ramp_in
    }

    /// Effective ramp-out duration.
    pub fn ramp_out(&self) -> f64 {
        self.ramp_out
    }

    /// Envelope factor in [0, 1] at time `t`.
    ///
    /// ```rust
    /// use shake_core::TimeWindow;
    /// use shake_noise::Envelope;
    ///
    /// let env = Envelope::new(TimeWindow::new(0.0, 100.0).unwrap(), 10.0, 20.0);
    /// assert_eq!(env.at(0.0), 0.0);
    /// assert_eq!(env.at(5.0), 0.5);
    /// assert_eq!(env.at(50.0), 1.0);
    /// assert_eq!(env.at(90.0), 0.5);
    /// assert_eq!(env.at(100.0), 0.0);
    /// ```
    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        let fade_in = if self.ramp_in > 0.0 {
            saturate((t - self.start) / self.ramp_in)
        } else {
            1.0
        };
        let fade_out = if self.ramp_out > 0.0 {
            saturate((self.end - t) / self.ramp_out)
        } else {
            1.0
        };
        fade_in * fade_out
    }
}
