//! Run one daylight window with the default fleet and print the report.
//!
//! Run with: cargo run -p fleet_core --example daylight_run

use bevy_ecs::prelude::World;
use fleet_core::report::FleetReport;
use fleet_core::runner::{initialize_simulation, run_until_horizon, simulation_schedule};
use fleet_core::scenario::{build_scenario, FleetParams};

fn main() {
    const SEED: u64 = 123;

    let mut world = World::new();
    if let Err(err) = build_scenario(&mut world, FleetParams::default().with_seed(SEED)) {
        eprintln!("invalid scenario: {err}");
        return;
    }
    initialize_simulation(&mut world);

    let mut schedule = simulation_schedule();
    let steps = run_until_horizon(&mut world, &mut schedule, usize::MAX);

    println!("--- Daylight run (seed {SEED}) ---");
    println!("Steps executed: {steps}");
    if let Some(report) = FleetReport::from_world(&mut world) {
        println!("Simulation time: {:.1} min", report.final_time);
        println!(
            "Still open: {} awaiting a drone, {} holding one",
            report.packages_awaiting_drone, report.packages_in_flight
        );
        println!("{report}");
    }
}
