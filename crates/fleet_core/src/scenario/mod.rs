//! Scenario setup: configuration of the daylight window and construction of
//! the world (fleet, statistics, generator, sampler).

mod build;
mod params;

pub use build::{build_scenario, build_scenario_with_sampler};
pub use params::{FleetParams, SimulationHorizon};
