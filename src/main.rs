use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use invasim::loader;
use invasim::report::{self, Summary};
use invasim::simulation::{SimConfig, SimEvent, Simulation};
use invasim::utils::{seed_from_clock, validate_inputs};

/// Seeded simulation of aliens overrunning a map of cities
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of rounds to simulate
    #[arg(long, default_value_t = 10_000, allow_negative_numbers = true)]
    iterations: i64,

    /// Number of aliens invading
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    aliens: i64,

    /// File with one alien name per line
    #[arg(long, default_value = "./data/alien_names.txt")]
    names: PathBuf,

    /// World map file
    #[arg(long, default_value = "./data/world-example-1.txt")]
    world: PathBuf,

    /// Seed for the random source; taken from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print the end-of-run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting the alien invasion simulation");

    validate_inputs(args.iterations, args.aliens, &args.names, &args.world)
        .wrap_err("Invalid user input")?;

    let config = SimConfig::default()
        .with_max_rounds(args.iterations as u64)
        .with_aliens(args.aliens as usize)
        .with_seed(args.seed.unwrap_or_else(seed_from_clock));
    info!("Seed: {} (pass --seed {} to replay this run)", config.seed, config.seed);

    let layout = loader::load_world(&args.world)
        .wrap_err_with(|| format!("Failed to load world map '{}'", args.world.display()))?;
    let names = loader::load_alien_names(&args.names, config.alien_count)
        .wrap_err_with(|| format!("Failed to load alien names '{}'", args.names.display()))?;

    let mut sim = Simulation::initialize(&layout, &names, config.seed);

    println!("The world before the invasion:");
    print!("{}", report::describe_world(&sim.world_snapshot()));
    println!();
    println!("Alien profiles:");
    print!("{}", report::render_roster(&sim.alien_snapshot()));
    println!();

    let mut destroyed = Vec::new();
    let terminated_early = sim.run_rounds_with(config.max_rounds, |outcome| {
        for event in &outcome.events {
            if let SimEvent::CityDestroyed { city, .. } = event {
                destroyed.push(city.clone());
            }
            if let Some(line) = report::render_event(event) {
                println!("[round {}] {}", outcome.round, line);
            }
        }
    });

    let world = sim.world_snapshot();
    let aliens = sim.alien_snapshot();

    println!();
    println!("What is left of the world:");
    print!("{}", report::render_world(&world));

    let summary = Summary {
        seed: config.seed,
        rounds: sim.round(),
        terminated_early,
        surviving_aliens: aliens.names().into_iter().map(str::to_string).collect(),
        surviving_cities: world.city_names().into_iter().map(str::to_string).collect(),
        destroyed_cities: destroyed,
    };

    if args.json {
        println!("{}", summary.to_json().wrap_err("Failed to serialize summary")?);
    }

    info!(
        "Simulation finished after {} rounds: {} aliens and {} cities survive",
        summary.rounds,
        summary.surviving_aliens.len(),
        summary.surviving_cities.len()
    );
    Ok(())
}
