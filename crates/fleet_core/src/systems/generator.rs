//! Generator systems: start the package stream and spawn packages on each
//! wake-up until the cutoff.

use bevy_ecs::prelude::{Commands, Res, ResMut};
use tracing::{debug, info};

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::distributions::SamplerResource;
use crate::ecs::{Package, PackageState};
use crate::generator::PackageGenerator;
use crate::scenario::FleetParams;
use crate::stats::FleetStatistics;

/// Schedules the first generator wake-up when the simulation starts.
pub fn simulation_started_system(
    mut clock: ResMut<SimulationClock>,
    mut generator: ResMut<PackageGenerator>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::SimulationStarted {
        return;
    }
    if generator.initialized {
        return;
    }
    generator.initialized = true;
    let now = clock.now();
    generator.next_wake = Some(now);
    clock.schedule_at(now, EventKind::GeneratePackage, None);
    info!(at = now, "simulation started");
}

/// Creates one package per wake-up while the clock is before the cutoff.
pub fn package_generator_system(
    mut commands: Commands,
    mut clock: ResMut<SimulationClock>,
    mut generator: ResMut<PackageGenerator>,
    mut sampler: ResMut<SamplerResource>,
    mut stats: ResMut<FleetStatistics>,
    params: Res<FleetParams>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::GeneratePackage {
        return;
    }

    let now = clock.now();
    if !generator.should_generate(now, params.cutoff_time()) {
        if !generator.stopped {
            debug!(at = now, generated = generator.generated_count, "package generation stopped");
        }
        generator.stop();
        return;
    }

    let distance = sampler.uniform01() * params.max_one_way_distance;
    let package = Package {
        state: PackageState::Loading,
        ..Package::new(distance, now)
    };
    let package_entity = commands.spawn(package).id();
    stats.distance.record(distance);
    stats.packages_created += 1;
    debug!(package = ?package_entity, at = now, distance, "package created");

    let loading = sampler.uniform(params.load_min, params.load_max);
    clock.schedule_in(
        loading,
        EventKind::LoadingComplete,
        Some(EventSubject::Package(package_entity)),
    );

    let gap = sampler.exponential(params.arrival_rate);
    let next = generator.advance(now, gap);
    if next.is_finite() {
        clock.schedule_at(next, EventKind::GeneratePackage, None);
    } else {
        generator.stop();
    }
}
