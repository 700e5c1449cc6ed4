//! CLI command implementations

pub mod bake;
pub mod preview;
pub mod sample;

use crate::{NoiseArgs, WindowArgs};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use shake_core::{AxisSettings, DVec3, NoiseParameters, TimeWindow};
use tracing::info;

/// Seeds offered by the random seed button.
const RANDOM_SEED_RANGE: std::ops::Range<i32> = 0..100;

/// Builds noise parameters from the shared flags.
pub fn noise_parameters(args: &NoiseArgs) -> NoiseParameters {
    let seed = if args.random_seed {
        let seed = rand::random_range(RANDOM_SEED_RANGE);
        info!(seed, "picked random seed");
        seed
    } else {
        args.seed
    };

    NoiseParameters {
        seed,
        frequency: args.frequency,
        roughness: args.roughness,
        fractal: !args.no_fractal,
        ramp_in: args.ramp_in,
        ramp_out: args.ramp_out,
        amplitude: args.amplitude,
        x: AxisSettings::new(args.strength_x, args.positive_x),
        y: AxisSettings::new(args.strength_y, args.positive_y),
        z: AxisSettings::new(args.strength_z, args.positive_z),
    }
}

/// Animation window from `--start` / `--end`.
pub fn time_window(args: &WindowArgs) -> Result<TimeWindow> {
    TimeWindow::new(args.start, args.end).context("Invalid animation range")
}

/// Reads an `x,y,z` triple.
pub fn vec3(values: &[f64], flag: &str) -> Result<DVec3> {
    match values {
        [x, y, z] => Ok(DVec3::new(*x, *y, *z)),
        _ => bail!("--{} expects three values x,y,z, got {}", flag, values.len()),
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> NoiseArgs {
        NoiseArgs {
            seed: 7,
            random_seed: false,
            frequency: 2.0,
            roughness: 0.25,
            no_fractal: true,
            ramp_in: 3.0,
            ramp_out: 4.0,
            amplitude: 0.5,
            strength_x: 1.0,
            strength_y: 2.0,
            strength_z: 3.0,
            positive_x: false,
            positive_y: true,
            positive_z: false,
        }
    }

    #[test]
    fn test_noise_parameters_from_flags() {
        let params = noise_parameters(&args());
        assert_eq!(params.seed, 7);
        assert!(!params.fractal);
        assert_eq!(params.y, AxisSettings::new(2.0, true));
        assert_eq!(params.amplitude, 0.5);
    }

    #[test]
    fn test_random_seed_in_range() {
        let mut flags = args();
        flags.random_seed = true;
        for _ in 0..50 {
            let seed = noise_parameters(&flags).seed;
            assert!(RANDOM_SEED_RANGE.contains(&seed));
        }
    }

    #[test]
    fn test_vec3() {
        assert_eq!(vec3(&[1.0, 2.0, 3.0], "base").unwrap(), DVec3::new(1.0, 2.0, 3.0));
        assert!(vec3(&[1.0, 2.0], "base").is_err());
    }

    #[test]
    fn test_time_window_rejects_reversed() {
        let window = WindowArgs { start: 10.0, end: 0.0 };
        assert!(time_window(&window).is_err());
    }
}
