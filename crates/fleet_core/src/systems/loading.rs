use bevy_ecs::prelude::{Query, Res, ResMut};
use tracing::debug;

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::ecs::{Package, PackageState};

/// Ground handling is over: the package starts looking for a drone right away.
pub fn loading_complete_system(
    mut clock: ResMut<SimulationClock>,
    event: Res<CurrentEvent>,
    mut packages: Query<&mut Package>,
) {
    if event.0.kind != EventKind::LoadingComplete {
        return;
    }
    let Some(EventSubject::Package(package_entity)) = event.0.subject else {
        return;
    };
    let Ok(mut package) = packages.get_mut(package_entity) else {
        return;
    };
    if package.state != PackageState::Loading {
        return;
    }

    package.state = PackageState::AwaitingDrone;
    debug!(package = ?package_entity, at = clock.now(), "package loaded, awaiting drone");
    clock.schedule_in(
        0.0,
        EventKind::TryAssignDrone,
        Some(EventSubject::Package(package_entity)),
    );
}
