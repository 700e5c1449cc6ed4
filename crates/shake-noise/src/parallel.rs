//! Parallel preview sampling using Rayon.
//!
//! Sampling is pure, so wide previews can spread columns across threads.
//! Results are identical to the sequential pass, column for column.
//!
//! # Example
//!
//! ```rust
//! use shake_core::{NoiseParameters, TimeWindow};
//! use shake_noise::{NoiseSampler, PreviewSampler};
//!
//! let window = TimeWindow::new(0.0, 1000.0).unwrap();
//! let sampler = NoiseSampler::new(&NoiseParameters::default(), window).unwrap();
//! let preview = PreviewSampler::new(8192, 1, window).unwrap();
//!
//! assert_eq!(preview.sample_par(&sampler), preview.sample(&sampler));
//! ```

use crate::preview::{PreviewSample, PreviewSampler, SampleBuffer};
use crate::sampler::NoiseSampler;
use rayon::prelude::*;

impl PreviewSampler {
    /// Parallel form of [`PreviewSampler::sample`].
    pub fn sample_par(&self, sampler: &NoiseSampler) -> SampleBuffer {
        let samples = (0..self.len())
            .into_par_iter()
            .map(|i| {
                let x = self.column(i);
                let time = self.time_at(x);
                PreviewSample {
                    x,
                    time,
                    value: sampler.curve(time),
                }
            })
            .collect();
        SampleBuffer::from_samples(samples)
    }
}

#[cfg(test)]
mod tests {
    use shake_core::{NoiseParameters, TimeWindow};

    use crate::{NoiseSampler, PreviewSampler};

    #[test]
    fn test_par_matches_sequential() {
        let window = TimeWindow::new(-50.0, 250.0).unwrap();
        let params = NoiseParameters::with_seed(31).with_ramps(30.0, 30.0);
        let sampler = NoiseSampler::new(&params, window).unwrap();
        for (width, step) in [(0, 1), (7, 3), (1920, 1), (1920, 4)] {
            let preview = PreviewSampler::new(width, step, window).unwrap();
            assert_eq!(preview.sample_par(&sampler), preview.sample(&sampler));
        }
    }
}
