use bevy_ecs::prelude::{Query, Res, ResMut};
use tracing::{debug, error};

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::ecs::{Drone, Package, PackageState};
use crate::facility::Facility;
use crate::scenario::FleetParams;
use crate::stats::FleetStatistics;

/// The drone is back at the center: charge the return leg, record the flight
/// and hand the drone back to the fleet.
pub fn return_arrived_system(
    mut clock: ResMut<SimulationClock>,
    event: Res<CurrentEvent>,
    params: Res<FleetParams>,
    mut stats: ResMut<FleetStatistics>,
    mut packages: Query<&mut Package>,
    mut drones: Query<(&mut Drone, &mut Facility)>,
) {
    if event.0.kind != EventKind::ReturnArrived {
        return;
    }
    let Some(EventSubject::Package(package_entity)) = event.0.subject else {
        return;
    };
    let Ok(mut package) = packages.get_mut(package_entity) else {
        return;
    };
    if package.state != PackageState::Returning {
        return;
    }
    let Some((mut drone, mut facility)) = package
        .assigned_drone
        .and_then(|entity| drones.get_mut(entity).ok())
    else {
        error!(package = ?package_entity, "returning package has no drone");
        return;
    };

    let now = clock.now();
    params
        .battery_model()
        .drain(&mut drone, package.distance_one_way);
    stats
        .flight
        .record(params.flight_time(package.round_trip_distance()));

    match facility.release(package_entity) {
        Ok(Some(next)) => {
            clock.schedule_in(0.0, EventKind::TryAssignDrone, Some(EventSubject::Package(next)));
        }
        Ok(None) => {}
        Err(err) => error!(package = ?package_entity, drone = drone.index, %err, "release failed"),
    }
    // A handed-over drone stays busy; its idle time starts only once it is free.
    if !facility.is_busy() {
        drone.idle_since = Some(now);
    }

    package.assigned_drone = None;
    package.released_at = Some(now);
    package.state = PackageState::Released;
    debug!(
        package = ?package_entity,
        drone = drone.index,
        at = now,
        battery = drone.current_battery,
        "drone is back at the center"
    );
}
