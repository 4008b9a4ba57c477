#![warn(clippy::all)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use gol_torus::{
    Config, ConsoleSink, ScopedTimer, SeedPattern, Simulation, VtkSink, DEFAULT_FILL_RATE,
};

/// Game of Life on a torus, writing one VTK snapshot per generation
#[derive(Parser)]
#[command(name = "gol_torus")]
#[command(about = "Game of Life on a torus, writing one VTK snapshot per generation")]
struct Args {
    /// Interior grid width; non-positive values select the 32-cell default
    #[arg(allow_negative_numbers = true)]
    width: i64,

    /// Interior grid height; non-positive values select the 32-cell default
    #[arg(allow_negative_numbers = true)]
    height: i64,

    /// Number of timesteps to simulate; negative counts run zero steps
    #[arg(allow_negative_numbers = true)]
    timesteps: i64,

    /// Initial pattern
    #[arg(long, value_enum, default_value = "runner")]
    pattern: Pattern,

    /// Random seed for --pattern random; equal seeds reproduce the same run
    #[arg(long)]
    seed: Option<u64>,

    /// Fill probability for --pattern random
    #[arg(long, default_value_t = DEFAULT_FILL_RATE)]
    fill_rate: f64,

    /// Directory receiving the .vti snapshot files
    #[arg(long, default_value = "./gol")]
    out_dir: PathBuf,

    /// Render generations to the terminal instead of writing files
    #[arg(long)]
    console: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Pattern {
    /// Five-cell glider anchored at (width / 3, height / 2)
    Runner,
    /// Random fill
    Random,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("fatal: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let pattern = match args.pattern {
        Pattern::Runner => SeedPattern::Runner,
        Pattern::Random => SeedPattern::Random {
            fill_rate: args.fill_rate.clamp(0.0, 1.0),
            seed: args.seed,
        },
    };
    let config = Config::new(args.width, args.height, args.timesteps, pattern);
    let mut simulation = Simulation::new(config);

    let _timer = ScopedTimer::new("simulation");
    if args.console {
        simulation.run(&mut ConsoleSink::stdout())?;
    } else {
        simulation.run(&mut VtkSink::new(&args.out_dir)?)?;
    }
    Ok(())
}
