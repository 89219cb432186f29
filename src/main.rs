use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{error, info};

use parabolic_range::core::ballistics::{DEFAULT_SPEED_MPS, EARTH_GRAVITY_MPS2};
use parabolic_range::core::sweep::{DEFAULT_HI_DEG, DEFAULT_LO_DEG, DEFAULT_SAMPLES, sweep};
use parabolic_range::core::{AngleDomain, ChartSpec, PhysicalConstants, init_logging};
use parabolic_range::render::{DEFAULT_SIZE_PX, render_chart};

/// Plot projectile range against launch angle for a fixed launch speed.
#[derive(Parser, Debug)]
#[command(name = "parabolic_range", version)]
struct Cli {
    /// Initial speed (m/s)
    #[arg(short = 'v', long, default_value_t = DEFAULT_SPEED_MPS, allow_negative_numbers = true)]
    speed: f64,

    /// Gravitational acceleration (m/s^2)
    #[arg(short = 'g', long, default_value_t = EARTH_GRAVITY_MPS2, allow_negative_numbers = true)]
    gravity: f64,

    /// First angle of the sweep (degrees)
    #[arg(long, default_value_t = DEFAULT_LO_DEG, allow_negative_numbers = true)]
    from: f64,

    /// Last angle of the sweep (degrees)
    #[arg(long, default_value_t = DEFAULT_HI_DEG, allow_negative_numbers = true)]
    to: f64,

    /// Number of evenly spaced angles, endpoints included
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Chart width (px)
    #[arg(long, default_value_t = DEFAULT_SIZE_PX.0)]
    width: u32,

    /// Chart height (px)
    #[arg(long, default_value_t = DEFAULT_SIZE_PX.1)]
    height: u32,

    /// Output file (.png or .svg); defaults to a timestamped PNG
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "range_vs_angle_{}mps_{}.png",
                self.speed,
                Local::now().format("%Y%m%d-%H%M%S")
            ))
        })
    }
}

fn run(cli: Cli) -> Result<()> {
    let constants =
        PhysicalConstants::new(cli.gravity, cli.speed).context("invalid physical constants")?;
    let domain =
        AngleDomain::new(cli.from, cli.to, cli.samples).context("invalid angle sweep")?;

    let result = sweep(&domain, constants);
    let (peak_angle, peak_range) = result.peak();
    info!(
        speed_mps = constants.speed_mps(),
        gravity_mps2 = constants.gravity_mps2(),
        samples = domain.len(),
        "peak range {peak_range:.2} m at {peak_angle:.2} deg"
    );

    let path = cli.output_path();
    let spec = ChartSpec::for_speed(constants.speed_mps());
    render_chart(&path, &result, &spec, (cli.width, cli.height))
        .with_context(|| format!("could not write chart to {}", path.display()))?;

    println!("{}", path.display());
    Ok(())
}

fn main() {
    init_logging();

    if let Err(err) = run(Cli::parse()) {
        error!("{err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
