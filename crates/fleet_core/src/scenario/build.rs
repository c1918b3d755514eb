use bevy_ecs::prelude::World;
use tracing::{info, warn};

use crate::clock::SimulationClock;
use crate::distributions::SamplerResource;
use crate::ecs::Drone;
use crate::error::ConfigError;
use crate::facility::Facility;
use crate::fleet::{DroneSelectionResource, Fleet};
use crate::generator::PackageGenerator;
use crate::stats::FleetStatistics;

use super::params::{FleetParams, SimulationHorizon};

/// Build the scenario into `world`, drawing random numbers from a sampler
/// seeded with `params.seed`.
pub fn build_scenario(world: &mut World, params: FleetParams) -> Result<(), ConfigError> {
    let sampler = SamplerResource::seeded(params.seed);
    build_scenario_with_sampler(world, params, sampler)
}

/// Build the scenario with an explicit sampler.
///
/// Inserts the clock, statistics, generator, horizon and selection resources,
/// and spawns `fleet_size` fully charged drones idle since time zero.
pub fn build_scenario_with_sampler(
    world: &mut World,
    params: FleetParams,
    sampler: SamplerResource,
) -> Result<(), ConfigError> {
    params.validate()?;
    if params.overruns_battery() {
        warn!(
            max_one_way_distance = params.max_one_way_distance,
            max_battery = params.max_battery,
            "longest round trip exceeds a full battery; drones may return with negative charge"
        );
    }

    world.insert_resource(SimulationClock::default());
    world.insert_resource(FleetStatistics::default());
    world.insert_resource(PackageGenerator::default());
    world.insert_resource(SimulationHorizon(params.daylight_minutes));
    world.insert_resource(DroneSelectionResource::first_fit());
    world.insert_resource(sampler);

    let drones = (0..params.fleet_size)
        .map(|index| {
            world
                .spawn((Drone::new(index, params.max_battery), Facility::default()))
                .id()
        })
        .collect();
    world.insert_resource(Fleet::new(drones));

    info!(
        fleet_size = params.fleet_size,
        cutoff = params.cutoff_time(),
        horizon = params.daylight_minutes,
        "scenario built"
    );
    world.insert_resource(params);
    Ok(())
}
