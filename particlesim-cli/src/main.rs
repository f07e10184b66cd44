mod headless;
mod view_app;

use clap::{Args, Parser, Subcommand, ValueEnum};
use particlesim_core::constants::{DEFAULT_HEIGHT, DEFAULT_PARTICLE_COUNT, DEFAULT_WIDTH};
use particlesim_core::{CollisionMode, RemainderPolicy, SimulationConfig};

#[derive(Parser)]
#[command(name = "particlesim")]
#[command(about = "Particlesim - falling, bouncing, colliding 2D particles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a window and run the simulation in real time
    Run {
        #[command(flatten)]
        sim: SimArgs,
    },
    /// Run without a window for a fixed number of frames and print a summary
    Headless {
        #[command(flatten)]
        sim: SimArgs,

        /// Number of frames to simulate
        #[arg(long, default_value_t = 600)]
        frames: usize,

        /// Wall-clock seconds per frame
        #[arg(long, default_value_t = 1.0 / 60.0)]
        frame_dt: f32,
    },
}

#[derive(Args, Debug)]
struct SimArgs {
    /// Number of particles to spawn
    #[arg(short = 'n', long, default_value_t = DEFAULT_PARTICLE_COUNT)]
    count: usize,

    /// Viewport width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Which particle pairs collide
    #[arg(long, value_enum, default_value_t = CollisionArg::Ordered)]
    collisions: CollisionArg,

    /// Carry leftover frame time to the next frame instead of a partial step
    #[arg(long)]
    carry_remainder: bool,

    /// Seed for particle placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CollisionArg {
    /// No particle-particle collisions
    Off,
    /// Every ordered pair, each overlap may resolve twice per step
    Ordered,
    /// Each unordered pair once per step
    Unique,
}

impl From<CollisionArg> for CollisionMode {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Off => CollisionMode::Disabled,
            CollisionArg::Ordered => CollisionMode::OrderedPairs,
            CollisionArg::Unique => CollisionMode::UniquePairs,
        }
    }
}

impl SimArgs {
    fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            particle_count: self.count,
            width: self.width,
            height: self.height,
            collision_mode: self.collisions.into(),
            remainder_policy: if self.carry_remainder {
                RemainderPolicy::Carry
            } else {
                RemainderPolicy::Flush
            },
            seed: self.seed,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { sim } => view_app::run_window(sim.to_config()),
        Commands::Headless {
            sim,
            frames,
            frame_dt,
        } => headless::run_headless(sim.to_config(), frames, frame_dt),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
