use bevy_ecs::prelude::{Query, Res, ResMut};
use tracing::debug;

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::ecs::{Package, PackageState};
use crate::scenario::FleetParams;
use crate::stats::FleetStatistics;

/// The package is delivered; the drone heads home.
pub fn unloading_complete_system(
    mut clock: ResMut<SimulationClock>,
    event: Res<CurrentEvent>,
    params: Res<FleetParams>,
    mut stats: ResMut<FleetStatistics>,
    mut packages: Query<&mut Package>,
) {
    if event.0.kind != EventKind::UnloadingComplete {
        return;
    }
    let Some(EventSubject::Package(package_entity)) = event.0.subject else {
        return;
    };
    let Ok(mut package) = packages.get_mut(package_entity) else {
        return;
    };
    if package.state != PackageState::Unloading {
        return;
    }

    let now = clock.now();
    package.state = PackageState::Delivered;
    package.delivered_at = Some(now);
    stats.packages_delivered += 1;
    stats.delivery_time.record(now - package.time_created);
    debug!(
        package = ?package_entity,
        at = now,
        delivery_time = now - package.time_created,
        "package arrived at destination, sending the drone home"
    );

    package.state = PackageState::Returning;
    clock.schedule_in(
        params.flight_time(package.distance_one_way),
        EventKind::ReturnArrived,
        Some(EventSubject::Package(package_entity)),
    );
}
