//! Gopher Hunter entry point
//!
//! Runs the simulation headless with the autopilot at a fixed frame rate.
//! A windowed host plugs its own clock, input and draw sink into
//! `platform::run` instead.

use std::error::Error;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;

use gopher_hunter::Tuning;
use gopher_hunter::platform::{self, Autopilot, FixedClock, PoseLog};
use gopher_hunter::sim::Session;

#[derive(Debug, Parser)]
#[command(name = "gopher-hunter", about = "Headless Gopher Hunter simulation")]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Simulated frames per second
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Times the autopilot plays again after losing
    #[arg(long, default_value_t = 2)]
    restarts: u32,

    /// JSON file overriding tuning defaults
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Print the final world state as JSON
    #[arg(long)]
    dump_final: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    let _ = Builder::from_env(env).try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    if !(args.fps.is_finite() && args.fps > 0.0) {
        return Err(format!("--fps must be positive, got {}", args.fps).into());
    }

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64,
    };

    log::info!("Gopher Hunter (headless) starting with seed {seed}");

    let mut session = Session::seeded(seed, tuning);
    let mut clock = FixedClock::new(1.0 / args.fps);
    let mut input = Autopilot::new(args.restarts);
    let mut sink = PoseLog::default();

    let summary = platform::run(&mut session, &mut clock, &mut input, &mut sink, args.frames);

    for line in &sink.last_text {
        log::info!("{line}");
    }
    log::info!(
        "{} frames, {} creatures spawned, {} game overs, last run {:.2}s",
        summary.frames,
        summary.spawned,
        summary.game_overs,
        summary.elapsed
    );

    if args.dump_final {
        println!("{}", serde_json::to_string_pretty(&session.world)?);
    }
    Ok(())
}
