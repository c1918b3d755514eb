pub mod assignment;
pub mod generator;
pub mod loading;
pub mod outbound;
pub mod returning;
pub mod unloading;

#[cfg(test)]
mod end_to_end_tests {
    use bevy_ecs::prelude::World;

    use crate::clock::{EventKind, EventSubject, SimulationClock};
    use crate::ecs::{Drone, Package, PackageState};
    use crate::fleet::Fleet;
    use crate::runner::{run_until_horizon, simulation_schedule};
    use crate::scenario::{build_scenario_with_sampler, FleetParams};
    use crate::stats::FleetStatistics;
    use crate::test_helpers::ScriptedSampler;

    #[test]
    fn delivers_one_package_end_to_end() {
        let mut world = World::new();
        let sampler = ScriptedSampler::new();
        build_scenario_with_sampler(
            &mut world,
            FleetParams::default().with_fleet_size(1),
            sampler.into_resource(),
        )
        .expect("scenario");

        let package = world
            .spawn(Package {
                state: PackageState::Loading,
                ..Package::new(1_878.0, 0.0)
            })
            .id();
        world.resource_mut::<SimulationClock>().schedule_at(
            3.5,
            EventKind::LoadingComplete,
            Some(EventSubject::Package(package)),
        );

        let mut schedule = simulation_schedule();
        let steps = run_until_horizon(&mut world, &mut schedule, 1_000);
        assert!(steps < 1_000, "runner did not converge");

        let package = *world.entity(package).get::<Package>().expect("package");
        assert_eq!(package.state, PackageState::Released);
        assert_eq!(package.assigned_at, Some(3.5));
        // 3.5 loading + 1 outbound + 1 unloading.
        assert_eq!(package.delivered_at, Some(5.5));
        assert_eq!(package.released_at, Some(6.5));
        assert_eq!(package.assigned_drone, None);

        let drone_entity = world.resource::<Fleet>().drones()[0];
        let drone = world.entity(drone_entity).get::<Drone>().expect("drone");
        assert_eq!(drone.current_battery, 20_000.0 - 2.0 * 1_878.0);
        assert_eq!(drone.idle_since, Some(6.5));

        let stats = world.resource::<FleetStatistics>();
        assert_eq!(stats.packages_delivered, 1);
        assert_eq!(stats.delivery_time.mean(), Some(5.5));
        assert_eq!(stats.flight.mean(), Some(2.0));
        assert_eq!(stats.charging.mean(), Some(0.0));
        assert_eq!(stats.idle_when_charged.mean(), Some(3.5));
    }
}
