//! shake - sample, preview and bake procedural shake noise
//!
//! Evaluates the same sampler a DCC noise editor uses for its graph and
//! for baking, without the host application.

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use shake_core::Axis;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "shake")]
#[command(author, version, about = "Procedural shake noise for animated transforms")]
#[command(long_about = "
Samples seeded fractal shake noise, previews its curve and bakes it onto a
base pose over a frame range.

Examples:
  shake sample -t 50                          # Offset at frame 50
  shake sample -t 12 --seed 7 --ramp-in 24    # Inside the ramp-in
  shake preview --width 400 --step 4          # Graph samples over 0..100
  shake preview --time-scale 20 --axis x      # X displacement, 20 px per frame
  shake bake --start 1 --end 120 --translate --rotate --json
  shake bake --start 1 --end 48 --base-translate 0,10,0 --keys
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the displacement at one time
    #[command(visible_alias = "s")]
    Sample(SampleArgs),

    /// Sample the curve a noise graph draws
    #[command(visible_alias = "p")]
    Preview(PreviewArgs),

    /// Bake base pose + noise over a frame range
    #[command(visible_alias = "b")]
    Bake(BakeArgs),
}

/// Shape and scale of the noise.
#[derive(Args, Clone)]
struct NoiseArgs {
    /// Noise seed
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    seed: i32,

    /// Pick a random seed in 0..100 (overrides --seed)
    #[arg(long)]
    random_seed: bool,

    /// Base octave oscillations per time unit
    #[arg(short, long, default_value = "5.0")]
    frequency: f64,

    /// Octave weight, 0..1
    #[arg(short, long, default_value = "0.5")]
    roughness: f64,

    /// Evaluate only the base octave
    #[arg(long)]
    no_fractal: bool,

    /// Fade-in duration from the start of the animation range
    #[arg(long, default_value = "0.0")]
    ramp_in: f64,

    /// Fade-out duration before the end of the animation range
    #[arg(long, default_value = "0.0")]
    ramp_out: f64,

    /// Overall curve level, 0..1
    #[arg(long, default_value = "1.0")]
    amplitude: f64,

    /// X strength
    #[arg(long, default_value = "5.0")]
    strength_x: f64,

    /// Y strength
    #[arg(long, default_value = "5.0")]
    strength_y: f64,

    /// Z strength
    #[arg(long, default_value = "5.0")]
    strength_z: f64,

    /// Keep X displacement non-negative
    #[arg(long)]
    positive_x: bool,

    /// Keep Y displacement non-negative
    #[arg(long)]
    positive_y: bool,

    /// Keep Z displacement non-negative
    #[arg(long)]
    positive_z: bool,
}

/// Animation range the envelope is anchored to.
#[derive(Args, Clone)]
struct WindowArgs {
    /// Animation start
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    start: f64,

    /// Animation end
    #[arg(long, default_value = "100.0", allow_negative_numbers = true)]
    end: f64,
}

#[derive(Args)]
struct SampleArgs {
    /// Evaluation time
    #[arg(short, long, allow_negative_numbers = true)]
    t: f64,

    #[command(flatten)]
    noise: NoiseArgs,

    #[command(flatten)]
    window: WindowArgs,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PreviewArgs {
    /// Graph width in pixels
    #[arg(short, long, default_value = "400")]
    width: u32,

    /// Pixel stride between samples
    #[arg(short, long, default_value = "4", allow_negative_numbers = true)]
    step: i64,

    /// Pixels per time unit; the window then starts at zero
    #[arg(long)]
    time_scale: Option<f64>,

    /// Sample one axis with strength applied instead of the unit curve
    #[arg(short, long, value_enum)]
    axis: Option<AxisArg>,

    /// Print widget-space points for a graph this many pixels tall
    #[arg(long)]
    height: Option<f64>,

    #[command(flatten)]
    noise: NoiseArgs,

    #[command(flatten)]
    window: WindowArgs,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BakeArgs {
    /// First frame
    #[arg(long, allow_negative_numbers = true)]
    start: f64,

    /// Last frame
    #[arg(long, allow_negative_numbers = true)]
    end: f64,

    /// Frame stride
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    step: i64,

    /// Shake the translate channel (the default when no channel is given)
    #[arg(long)]
    translate: bool,

    /// Shake the rotate channel
    #[arg(long)]
    rotate: bool,

    /// Shake the scale channel
    #[arg(long)]
    scale: bool,

    /// Base translation x,y,z
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 3,
        default_values_t = [0.0, 0.0, 0.0],
        allow_negative_numbers = true
    )]
    base_translate: Vec<f64>,

    /// Base rotation x,y,z
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 3,
        default_values_t = [0.0, 0.0, 0.0],
        allow_negative_numbers = true
    )]
    base_rotate: Vec<f64>,

    /// Base scale x,y,z
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 3,
        default_values_t = [1.0, 1.0, 1.0],
        allow_negative_numbers = true
    )]
    base_scale: Vec<f64>,

    /// Animation start for the envelope (defaults to --start)
    #[arg(long, allow_negative_numbers = true)]
    anim_start: Option<f64>,

    /// Animation end for the envelope (defaults to --end)
    #[arg(long, allow_negative_numbers = true)]
    anim_end: Option<f64>,

    /// Print individual keys instead of full poses
    #[arg(long)]
    keys: bool,

    #[command(flatten)]
    noise: NoiseArgs,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise each `-v` raises the level one
/// step from `warn`.
fn init_logging(verbose: u8) -> Result<()> {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Sample(args) => commands::sample::run(args, cli.verbose),
        Commands::Preview(args) => commands::preview::run(args, cli.verbose),
        Commands::Bake(args) => commands::bake::run(args, cli.verbose),
    }
}
