//! Bake command
//!
//! Adds shake offsets to a base pose for every frame of a range and prints
//! the resulting keys or poses.

use crate::BakeArgs;
use anyhow::{Context, Result};
use shake_core::{Channel, Pose, ShakeSet, TimeRange, TimeWindow};
use shake_noise::{BakeDriver, Keyframe};
use tracing::{debug, info};

pub fn run(args: BakeArgs, verbose: u8) -> Result<()> {
    let params = super::noise_parameters(&args.noise);

    let mut channels = Vec::new();
    if args.translate {
        channels.push(Channel::Translate);
    }
    if args.rotate {
        channels.push(Channel::Rotate);
    }
    if args.scale {
        channels.push(Channel::Scale);
    }
    if channels.is_empty() {
        channels.push(Channel::Translate);
    }
    let shakes = channels
        .iter()
        .fold(ShakeSet::default(), |set, &channel| set.with(channel, params));

    let base = Pose::new(
        super::vec3(&args.base_translate, "base-translate")?,
        super::vec3(&args.base_rotate, "base-rotate")?,
        super::vec3(&args.base_scale, "base-scale")?,
    );

    let range = TimeRange::new(args.start, args.end, args.step).context("Invalid bake range")?;
    let window = TimeWindow::new(
        args.anim_start.unwrap_or(args.start),
        args.anim_end.unwrap_or(args.end),
    )
    .context("Invalid animation range")?;
    debug!(?range, ?window, ?channels, "bake");

    let driver = BakeDriver::new(range, window, &shakes).context("Invalid shake parameters")?;

    if args.keys {
        let mut keys: Vec<Keyframe> = Vec::with_capacity(driver.key_count());
        let written = driver.bake_into(&base, &mut keys);
        info!(written, "baked keys");
        if args.json {
            return super::print_json(&keys);
        }
        if verbose > 0 {
            println!("{} keys over {} frames", written, range.len());
        }
        for key in &keys {
            println!(
                "{} {} {:.6} {:.6} {:.6}",
                key.time, key.channel, key.value.x, key.value.y, key.value.z
            );
        }
        return Ok(());
    }

    let frames = driver.bake(&base);
    info!(frames = frames.len(), "baked poses");
    if args.json {
        return super::print_json(&frames);
    }
    if verbose > 0 {
        println!("{} frames, shaking {:?}", frames.len(), channels);
    }
    for frame in &frames {
        let pose = &frame.pose;
        println!(
            "{} t=({:.6} {:.6} {:.6}) r=({:.6} {:.6} {:.6}) s=({:.6} {:.6} {:.6})",
            frame.time,
            pose.translate.x,
            pose.translate.y,
            pose.translate.z,
            pose.rotate.x,
            pose.rotate.y,
            pose.rotate.z,
            pose.scale.x,
            pose.scale.y,
            pose.scale.z
        );
    }
    Ok(())
}
