//! Sample command
//!
//! Evaluates the displacement of one shake at a single time.

use crate::SampleArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use shake_core::{DVec3, TimeWindow};
use tracing::debug;

#[derive(Serialize)]
struct SampleOutput {
    time: f64,
    seed: i32,
    window: TimeWindow,
    offset: DVec3,
}

pub fn run(args: SampleArgs, verbose: u8) -> Result<()> {
    let params = super::noise_parameters(&args.noise);
    let window = super::time_window(&args.window)?;
    debug!(?params, ?window, t = args.t, "sample");

    let offset = shake_noise::sample(&params, window, args.t)
        .with_context(|| format!("Failed to sample at t={}", args.t))?;

    if args.json {
        return super::print_json(&SampleOutput {
            time: args.t,
            seed: params.seed,
            window,
            offset,
        });
    }

    if verbose > 0 {
        println!(
            "seed {} at t={} over {}..{}",
            params.seed, args.t, window.start, window.end
        );
    }
    println!("{:.6} {:.6} {:.6}", offset.x, offset.y, offset.z);
    Ok(())
}
