mod app;
mod pacer;
mod trails;

use app::GravityApp;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gravity_core::{
    default_scenario, ColorMode, IntegrationOrder, PointerSample, SimConfig, Simulation,
};

/// Frame duration reported for the idle pointer in headless runs (60 fps)
const HEADLESS_FRAME_MILLIS: f32 = 1000.0 / 60.0;

#[derive(Parser)]
#[command(name = "gravity")]
#[command(about = "Interactive 2D N-body gravity sandbox", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    sim: SimArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive window (default)
    Window,
    /// Run without a window and print the body count
    Simulate {
        /// Number of ticks to run
        #[arg(long, default_value_t = 600)]
        ticks: u64,
        /// Print a line every this many ticks
        #[arg(long, default_value_t = 60)]
        every: u64,
    },
}

#[derive(Args)]
struct SimArgs {
    /// Gravitational constant
    #[arg(long, global = true, default_value_t = gravity_core::config::DEFAULT_GRAVITY)]
    gravity: f32,
    /// Fixed integration step per tick
    #[arg(long, global = true, default_value_t = gravity_core::config::DEFAULT_TIME_STEP)]
    time_step: f32,
    /// Bodies beyond this |x| or |y| are removed
    #[arg(long, global = true, default_value_t = gravity_core::config::DEFAULT_WORLD_BOUND)]
    world_bound: f32,
    /// Seed for spawned mass and color
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[arg(long, global = true, value_enum, default_value_t = OrderArg::Sequential)]
    order: OrderArg,
    #[arg(long, global = true, value_enum, default_value_t = ColorArg::Rgb)]
    colors: ColorArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Sequential,
    Simultaneous,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Rgb,
    Hue,
}

impl SimArgs {
    fn to_config(&self) -> SimConfig {
        SimConfig {
            gravity: self.gravity,
            time_step: self.time_step,
            world_bound: self.world_bound,
            seed: self.seed,
            integration: match self.order {
                OrderArg::Sequential => IntegrationOrder::Sequential,
                OrderArg::Simultaneous => IntegrationOrder::Simultaneous,
            },
            color_mode: match self.colors {
                ColorArg::Rgb => ColorMode::Rgb,
                ColorArg::Hue => ColorMode::Hue,
            },
            ..SimConfig::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let config = cli.sim.to_config();

    let result = match cli.command.unwrap_or(Commands::Window) {
        Commands::Window => run_window(config),
        Commands::Simulate { ticks, every } => run_headless(config, ticks, every),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_window(config: SimConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Fail on the command line rather than inside the window
    config.validate()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Gravity")
            .with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };
    eframe::run_native(
        "gravity",
        options,
        Box::new(move |cc| Ok(Box::new(GravityApp::new(config, cc)))),
    )?;
    Ok(())
}

fn run_headless(
    config: SimConfig,
    ticks: u64,
    every: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = Simulation::new(config, default_scenario())?;
    let every = every.max(1);

    for _ in 0..ticks {
        sim.tick(PointerSample::new(0.0, 0.0, HEADLESS_FRAME_MILLIS));
        if sim.ticks() % every == 0 {
            println!("tick {}: {} bodies", sim.ticks(), sim.body_count());
        }
    }

    println!("{}", sim.report());
    Ok(())
}
