use std::process::ExitCode;

use clap::Parser;

use hill_terrain::ascii;
use hill_terrain::config::{GenerationConfig, HillPreset, SmoothSchedule};
use hill_terrain::logging;
use hill_terrain::session::{TerrainAction, TerrainSession};
use hill_terrain::smooth::SmoothPasses;

#[derive(Parser, Debug)]
#[command(name = "hill_terrain")]
#[command(about = "Sculpt a heightmap from randomly placed, smoothed hills")]
struct Args {
    /// Width of the heightmap in cells
    #[arg(short = 'W', long, default_value = "257")]
    width: usize,

    /// Height of the heightmap in cells
    #[arg(short = 'H', long, default_value = "257")]
    height: usize,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Parameter preset used as the base configuration
    #[arg(short, long, value_enum, default_value_t = HillPreset::Gentle)]
    preset: HillPreset,

    /// JSON config file (replaces the preset)
    #[arg(short, long)]
    config: Option<String>,

    /// Number of hills to stamp
    #[arg(long)]
    hills: Option<usize>,

    /// Minimum hill radius in cells
    #[arg(long)]
    min_radius: Option<usize>,

    /// Maximum hill radius in cells
    #[arg(long)]
    max_radius: Option<usize>,

    /// Minimum normalized peak height
    #[arg(long)]
    min_height: Option<f32>,

    /// Maximum normalized peak height
    #[arg(long)]
    max_height: Option<f32>,

    /// When to run the smoothing filter
    #[arg(long, value_parser = parse_schedule)]
    smooth_schedule: Option<SmoothSchedule>,

    /// Skip the reverse smoothing passes (matches terrain from the older tool)
    #[arg(long)]
    forward_only_smoothing: bool,

    /// Action to run; repeat to run several in order (flatten, regenerate, raise:x,z,amount)
    #[arg(short, long = "action", default_value = "regenerate")]
    actions: Vec<String>,

    /// Print an ASCII preview this many columns wide
    #[arg(long)]
    ascii: Option<usize>,

    /// Print a height histogram
    #[arg(long)]
    histogram: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn parse_schedule(s: &str) -> Result<SmoothSchedule, String> {
    match s {
        "each-hill" => Ok(SmoothSchedule::EachHill),
        "once" => Ok(SmoothSchedule::Once),
        "never" => Ok(SmoothSchedule::Never),
        other => Err(format!("expected each-hill, once or never, got '{}'", other)),
    }
}

fn build_config(args: &Args) -> hill_terrain::Result<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::load(path)?,
        None => args.preset.config(),
    };

    if let Some(v) = args.hills { config.hill_count = v; }
    if let Some(v) = args.min_radius { config.min_radius = v; }
    if let Some(v) = args.max_radius { config.max_radius = v; }
    if let Some(v) = args.min_height { config.min_height = v; }
    if let Some(v) = args.max_height { config.max_height = v; }
    if let Some(v) = args.smooth_schedule { config.schedule = v; }
    if args.forward_only_smoothing {
        config.smoothing.passes = SmoothPasses::ForwardOnly;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> hill_terrain::Result<()> {
    let config = build_config(args)?;
    if args.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    // Parse every action before touching the terrain
    let actions = args.actions.iter()
        .map(|a| a.parse::<TerrainAction>())
        .collect::<hill_terrain::Result<Vec<_>>>()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Generating hill field with seed: {}", seed);
    println!("Map size: {}x{}", args.width, args.height);
    println!(
        "Hills: {} (radius {}..{}, height {}..{}), smoothing {} / {:?}",
        config.hill_count, config.min_radius, config.max_radius,
        config.min_height, config.max_height, config.schedule, config.smoothing.passes,
    );

    let mut session = TerrainSession::new(args.width, args.height, config, seed)?;

    for action in actions {
        println!("Running {}...", action);
        if let Some(stats) = session.apply(action)? {
            println!("  Placed {} hills ({} skipped), {} smoothing runs",
                stats.hills_placed, stats.hills_skipped, stats.smoothing_runs);
            println!("  Height range: {:.6} to {:.6}", stats.min_height, stats.max_height);
        }
    }

    if let Some(cols) = args.ascii {
        print!("{}", ascii::render_ascii(session.heightmap(), cols));
    }
    if args.histogram {
        ascii::print_height_histogram(session.heightmap(), 20);
    }

    Ok(())
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
