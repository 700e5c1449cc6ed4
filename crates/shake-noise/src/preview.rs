//! Preview curve sampling for a noise graph widget.
//!
//! A graph `width` pixels wide is sampled every `step` pixels. Pixel `x`
//! maps linearly onto the preview window:
//!
//! ```text
//! time(x) = start + x * (end - start) / width
//! ```
//!
//! The values are [`NoiseSampler::curve`] values (unit strength), which
//! is what the graph draws regardless of the per-axis strengths.
//!
//! # Example
//!
//! ```rust
//! use shake_core::{NoiseParameters, TimeWindow};
//! use shake_noise::{NoiseSampler, PreviewSampler};
//!
//! let window = TimeWindow::new(0.0, 100.0).unwrap();
//! let sampler = NoiseSampler::new(&NoiseParameters::default(), window).unwrap();
//! let preview = PreviewSampler::new(400, 4, window).unwrap();
//!
//! let buffer = preview.sample(&sampler);
//! assert_eq!(buffer.len(), 100);
//! let points = buffer.polyline(120.0);
//! assert_eq!(points.len(), buffer.len());
//! ```

use crate::sampler::NoiseSampler;
use serde::Serialize;
use shake_core::{Axis, Error, Result, TimeWindow};

/// Pixel stride of the editor's graph.
pub const DEFAULT_PREVIEW_STEP: u32 = 4;

/// Pixels per time unit of the editor's graph.
pub const DEFAULT_TIME_SCALE: f64 = 20.0;

/// One preview sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreviewSample {
    /// Pixel column.
    pub x: u32,
    /// Time the column maps to.
    pub time: f64,
    /// Sampled value.
    pub value: f64,
}

/// Ordered samples from one preview pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SampleBuffer {
    samples: Vec<PreviewSample>,
}

impl SampleBuffer {
    pub(crate) fn from_samples(samples: Vec<PreviewSample>) -> Self {
        Self { samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in pixel order.
    pub fn samples(&self) -> &[PreviewSample] {
        &self.samples
    }

    /// Iterates the samples.
    pub fn iter(&self) -> std::slice::Iter<'_, PreviewSample> {
        self.samples.iter()
    }

    /// Sampled values in pixel order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    /// Widget-space points for a graph `height` pixels tall.
    ///
    /// Values are drawn around the horizontal midline; a unit value
    /// reaches the top or bottom edge. Y grows downward, so positive
    /// values move up.
    ///
    /// The mapping is deliberately not `mid + height * value`, which would
    /// draw positive values downward and leave the widget once
    /// `|value| > 0.5`.
    pub fn polyline(&self, height: f64) -> Vec<[f64; 2]> {
        let mid = height * 0.5;
        self.samples
            .iter()
            .map(|s| [f64::from(s.x), mid - mid * s.value])
            .collect()
    }
}

impl<'a> IntoIterator for &'a SampleBuffer {
    type Item = &'a PreviewSample;
    type IntoIter = std::slice::Iter<'a, PreviewSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Samples a shake at evenly spaced pixel columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSampler {
    width: u32,
    step: u32,
    window: TimeWindow,
}

impl PreviewSampler {
    /// Creates a preview sampler over `window`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when `step <= 0` or the window is invalid.
    pub fn new(width: u32, step: i64, window: TimeWindow) -> Result<Self> {
        window.validate()?;
        let step = u32::try_from(step)
            .ok()
            .filter(|&s| s > 0)
            .ok_or_else(|| {
                Error::invalid_parameter("step", format!("must be positive, got {step}"))
            })?;
        Ok(Self {
            width,
            step,
            window,
        })
    }

    /// Preview whose window spans `width / time_scale` time units from zero.
    pub fn with_time_scale(width: u32, step: i64, time_scale: f64) -> Result<Self> {
        Self::new(width, step, TimeWindow::from_time_scale(width, time_scale)?)
    }

    /// Graph width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel stride.
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Time window mapped onto the graph.
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Number of samples one pass produces: `ceil(width / step)`.
    pub fn len(&self) -> usize {
        self.width.div_ceil(self.step) as usize
    }

    /// True for a zero-width graph.
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Pixel column of sample `index`.
    #[inline]
    pub(crate) fn column(&self, index: usize) -> u32 {
        index as u32 * self.step
    }

    /// Time that pixel column `x` maps to.
    #[inline]
    pub fn time_at(&self, x: u32) -> f64 {
        if self.width == 0 {
            return self.window.start;
        }
        self.window.start + f64::from(x) * self.window.duration() / f64::from(self.width)
    }

    /// Samples the unit curve of `sampler`.
    pub fn sample(&self, sampler: &NoiseSampler) -> SampleBuffer {
        self.sample_with(|t| sampler.curve(t))
    }

    /// Samples the displacement of one axis, strength and sign applied.
    pub fn sample_axis(&self, sampler: &NoiseSampler, axis: Axis) -> SampleBuffer {
        self.sample_with(|t| sampler.axis(axis, t))
    }

    fn sample_with(&self, f: impl Fn(f64) -> f64) -> SampleBuffer {
        let samples = (0..self.len())
            .map(|i| {
                let x = self.column(i);
                let time = self.time_at(x);
                PreviewSample {
                    x,
                    time,
                    value: f(time),
                }
            })
            .collect();
        SampleBuffer::from_samples(samples)
    }

    /// Pixel columns of the ramp-in and ramp-out guide lines.
    ///
    /// Ramps are laid out against the sampler's animation window scaled to
    /// the graph width, like the guides drawn over the curve.
    ///
    /// ```rust
    /// use shake_core::{NoiseParameters, TimeWindow};
    /// use shake_noise::{NoiseSampler, PreviewSampler};
    ///
    /// let window = TimeWindow::new(0.0, 100.0).unwrap();
    /// let params = NoiseParameters::default().with_ramps(10.0, 25.0);
    /// let sampler = NoiseSampler::new(&params, window).unwrap();
    /// let preview = PreviewSampler::new(200, 4, window).unwrap();
    /// assert_eq!(preview.ramp_markers(&sampler), (20.0, 150.0));
    /// ```
    pub fn ramp_markers(&self, sampler: &NoiseSampler) -> (f64, f64) {
        let width = f64::from(self.width);
        let duration = sampler.window().duration();
        if duration <= 0.0 {
            return (0.0, width);
        }
        let scale = width / duration;
        let envelope = sampler.envelope_shape();
        (envelope.ramp_in() * scale, width - envelope.ramp_out() * scale)
    }
}
