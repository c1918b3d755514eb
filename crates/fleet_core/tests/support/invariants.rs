#![allow(dead_code)]

use std::collections::HashSet;

use bevy_ecs::prelude::World;
use fleet_core::ecs::{Drone, Package};
use fleet_core::facility::Facility;
use fleet_core::fleet::Fleet;
use fleet_core::scenario::FleetParams;

const EPS: f64 = 1e-6;

/// Battery stays within `[0, max_battery]` for every drone.
pub fn assert_battery_bounds(world: &World) {
    let max = world.resource::<FleetParams>().max_battery;
    for &entity in world.resource::<Fleet>().drones() {
        let drone = world.get::<Drone>(entity).expect("drone");
        assert!(
            drone.current_battery >= -EPS && drone.current_battery <= max + EPS,
            "drone {} battery {} outside [0, {max}]",
            drone.index,
            drone.current_battery
        );
    }
}

/// Each drone is held by at most one package, and that package agrees.
pub fn assert_exclusive_holders(world: &World) {
    let mut held = HashSet::new();
    for entity in world.iter_entities() {
        let Some(package) = entity.get::<Package>() else {
            continue;
        };
        if !package.state.holds_drone() {
            assert!(package.assigned_drone.is_none(), "{:?} keeps a drone", package.state);
            continue;
        }
        let drone = package.assigned_drone.expect("holding package has a drone");
        assert!(held.insert(drone), "drone {drone:?} held twice");
        let facility = world.get::<Facility>(drone).expect("facility");
        assert_eq!(facility.holder(), Some(entity.id()));
    }
    for &entity in world.resource::<Fleet>().drones() {
        let facility = world.get::<Facility>(entity).expect("facility");
        let drone = world.get::<Drone>(entity).expect("drone");
        assert_eq!(facility.is_busy(), held.contains(&entity));
        assert_eq!(drone.is_idle(), !facility.is_busy());
    }
}

pub fn assert_step_invariants(world: &World) {
    assert_battery_bounds(world);
    assert_exclusive_holders(world);
}
