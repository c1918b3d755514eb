//! Delivery fleet simulator CLI
//!
//! Simulates one daylight window of drone deliveries and prints the
//! end-of-day report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bevy_ecs::prelude::World;
use clap::Parser;
use fleet_core::report::FleetReport;
use fleet_core::runner::{initialize_simulation, run_until_horizon, simulation_schedule};
use fleet_core::scenario::{build_scenario, FleetParams};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fleet-sim")]
#[command(about = "Simulate a day of drone package deliveries")]
struct Args {
    /// JSON file with fleet parameters; missing fields keep their defaults
    #[arg(short, long, env = "FLEET_SIM_CONFIG")]
    config: Option<PathBuf>,

    /// Random seed (entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of drones
    #[arg(short, long)]
    fleet_size: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fleet_sim=info,fleet_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut params = match &args.config {
        Some(path) => FleetParams::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => FleetParams::default(),
    };
    if let Some(seed) = args.seed {
        params = params.with_seed(seed);
    }
    if let Some(fleet_size) = args.fleet_size {
        params = params.with_fleet_size(fleet_size);
    }

    info!(
        fleet_size = params.fleet_size,
        seed = ?params.seed,
        horizon = params.daylight_minutes,
        "starting delivery simulation"
    );

    let mut world = World::new();
    build_scenario(&mut world, params).context("building scenario")?;
    initialize_simulation(&mut world);

    let mut schedule = simulation_schedule();
    let steps = run_until_horizon(&mut world, &mut schedule, usize::MAX);

    let report = FleetReport::from_world(&mut world).context("scenario resources missing")?;
    info!(
        steps,
        final_time = report.final_time,
        awaiting = report.packages_awaiting_drone,
        in_flight = report.packages_in_flight,
        "simulation finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
