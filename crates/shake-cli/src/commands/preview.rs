//! Preview command
//!
//! Samples the curve a noise graph widget draws: one value every `step`
//! pixels, plus the ramp guide positions.

use crate::PreviewArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use shake_core::TimeWindow;
use shake_noise::{NoiseSampler, PreviewSampler, SampleBuffer};
use tracing::debug;

#[derive(Serialize)]
struct PreviewOutput {
    width: u32,
    step: u32,
    window: TimeWindow,
    ramp_markers: [f64; 2],
    samples: SampleBuffer,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<Vec<[f64; 2]>>,
}

pub fn run(args: PreviewArgs, verbose: u8) -> Result<()> {
    let params = super::noise_parameters(&args.noise);
    let window = match args.time_scale {
        Some(scale) => TimeWindow::from_time_scale(args.width, scale)
            .context("Invalid --time-scale")?,
        None => super::time_window(&args.window)?,
    };

    let sampler = NoiseSampler::new(&params, window).context("Invalid noise parameters")?;
    let preview = PreviewSampler::new(args.width, args.step, window).context("Invalid preview")?;
    debug!(width = args.width, step = args.step, ?window, "preview");

    let samples = match args.axis {
        Some(axis) => preview.sample_axis(&sampler, axis.into()),
        None => preview.sample_par(&sampler),
    };
    let (ramp_in, ramp_out) = preview.ramp_markers(&sampler);
    let points = args.height.map(|height| samples.polyline(height));

    if args.json {
        return super::print_json(&PreviewOutput {
            width: preview.width(),
            step: preview.step(),
            window,
            ramp_markers: [ramp_in, ramp_out],
            samples,
            points,
        });
    }

    if verbose > 0 {
        println!(
            "{} samples over {}..{} (ramp guides at x={:.2}, x={:.2})",
            samples.len(),
            window.start,
            window.end,
            ramp_in,
            ramp_out
        );
    }

    match points {
        Some(points) => {
            for [x, y] in points {
                println!("{:.3} {:.3}", x, y);
            }
        }
        None => {
            for sample in &samples {
                println!("{} {:.4} {:.6}", sample.x, sample.time, sample.value);
            }
        }
    }
    Ok(())
}
