use bevy_ecs::prelude::{Query, Res, ResMut};
use tracing::{debug, error};

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::ecs::{Drone, Package, PackageState};
use crate::scenario::FleetParams;

/// The drone reached the destination: charge the outbound leg, start unloading.
pub fn outbound_arrived_system(
    mut clock: ResMut<SimulationClock>,
    event: Res<CurrentEvent>,
    params: Res<FleetParams>,
    mut packages: Query<&mut Package>,
    mut drones: Query<&mut Drone>,
) {
    if event.0.kind != EventKind::OutboundArrived {
        return;
    }
    let Some(EventSubject::Package(package_entity)) = event.0.subject else {
        return;
    };
    let Ok(mut package) = packages.get_mut(package_entity) else {
        return;
    };
    if package.state != PackageState::Outbound {
        return;
    }
    let Some(mut drone) = package
        .assigned_drone
        .and_then(|entity| drones.get_mut(entity).ok())
    else {
        error!(package = ?package_entity, "outbound package has no drone");
        return;
    };

    params
        .battery_model()
        .drain(&mut drone, package.distance_one_way);
    package.state = PackageState::Unloading;
    debug!(
        package = ?package_entity,
        drone = drone.index,
        at = clock.now(),
        battery = drone.current_battery,
        "drone at destination, unloading"
    );

    clock.schedule_in(
        params.unload_duration,
        EventKind::UnloadingComplete,
        Some(EventSubject::Package(package_entity)),
    );
}
