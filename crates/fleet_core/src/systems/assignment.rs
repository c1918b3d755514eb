//! Drone assignment: the fleet scan, the seize and the recharge step happen
//! in one system run, so no other package can touch the drone in between.

use bevy_ecs::prelude::{Entity, Query, Res, ResMut};
use tracing::debug;

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::ecs::{Drone, Package, PackageState};
use crate::facility::{Facility, SeizeOutcome};
use crate::fleet::{DroneCandidate, DroneSelectionResource, Fleet};
use crate::scenario::FleetParams;
use crate::stats::FleetStatistics;

#[allow(clippy::too_many_arguments)]
pub fn try_assign_drone_system(
    mut clock: ResMut<SimulationClock>,
    event: Res<CurrentEvent>,
    params: Res<FleetParams>,
    fleet: Res<Fleet>,
    selection: Res<DroneSelectionResource>,
    mut stats: ResMut<FleetStatistics>,
    mut packages: Query<&mut Package>,
    mut drones: Query<(&mut Drone, &mut Facility)>,
) {
    if event.0.kind != EventKind::TryAssignDrone {
        return;
    }
    let Some(EventSubject::Package(package_entity)) = event.0.subject else {
        return;
    };
    let Ok(mut package) = packages.get_mut(package_entity) else {
        return;
    };
    if package.state != PackageState::AwaitingDrone {
        return;
    }

    let now = clock.now();
    let battery = params.battery_model();
    let subject = Some(EventSubject::Package(package_entity));

    // A facility handed over on release is already ours.
    let handed_over: Option<Entity> = fleet.drones().iter().copied().find(|&entity| {
        drones
            .get(entity)
            .is_ok_and(|(_, facility)| facility.holder() == Some(package_entity))
    });

    let selected = handed_over.or_else(|| {
        let candidates: Vec<DroneCandidate> = fleet
            .drones()
            .iter()
            .filter_map(|&entity| {
                drones
                    .get(entity)
                    .ok()
                    .map(|(drone, facility)| DroneCandidate::from_parts(entity, drone, facility))
            })
            .collect();
        selection.select(&candidates, package.round_trip_distance(), &battery, now)
    });

    let Some(drone_entity) = selected else {
        clock.schedule_in(params.retry_interval, EventKind::TryAssignDrone, subject);
        return;
    };
    let Ok((mut drone, mut facility)) = drones.get_mut(drone_entity) else {
        clock.schedule_in(params.retry_interval, EventKind::TryAssignDrone, subject);
        return;
    };

    match facility.seize(package_entity) {
        SeizeOutcome::Acquired => {}
        SeizeOutcome::Queued { position } => {
            // Woken by the return system once the facility is handed over.
            debug!(package = ?package_entity, drone = drone.index, position, "queued on busy drone");
            return;
        }
    }

    let outcome = battery.recharge(&mut drone, now);
    stats.charging.record(outcome.charging_time);
    stats.idle_when_charged.record(outcome.idle_waste);
    drone.idle_since = None;

    package.assigned_drone = Some(drone_entity);
    package.assigned_at = Some(now);
    package.state = PackageState::Outbound;

    debug!(
        package = ?package_entity,
        drone = drone.index,
        at = now,
        distance = package.distance_one_way,
        round_trip = package.round_trip_distance(),
        battery = drone.current_battery,
        "package on the way"
    );

    clock.schedule_in(
        params.flight_time(package.distance_one_way),
        EventKind::OutboundArrived,
        subject,
    );
}
