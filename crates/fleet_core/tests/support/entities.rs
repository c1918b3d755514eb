#![allow(dead_code)]

use bevy_ecs::prelude::{Entity, World};
use fleet_core::clock::{EventKind, EventSubject, SimTime, SimulationClock};
use fleet_core::ecs::{Drone, Package, PackageState};
use fleet_core::facility::Facility;

/// Builder for package fixtures placed directly into a given state.
#[derive(Clone, Debug)]
pub struct PackageBuilder {
    distance_one_way: f64,
    time_created: SimTime,
    state: PackageState,
}

impl Default for PackageBuilder {
    fn default() -> Self {
        Self {
            distance_one_way: 1_000.0,
            time_created: 0.0,
            state: PackageState::AwaitingDrone,
        }
    }
}

impl PackageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_distance(mut self, distance_one_way: f64) -> Self {
        self.distance_one_way = distance_one_way;
        self
    }

    pub fn created_at(mut self, time: SimTime) -> Self {
        self.time_created = time;
        self
    }

    pub fn with_state(mut self, state: PackageState) -> Self {
        self.state = state;
        self
    }

    pub fn spawn(self, world: &mut World) -> Entity {
        let package = Package {
            state: self.state,
            ..Package::new(self.distance_one_way, self.time_created)
        };
        world.spawn(package).id()
    }
}

/// Overwrite a drone's battery and idle marker.
pub fn set_drone(world: &mut World, drone: Entity, battery: f64, idle_since: Option<SimTime>) {
    let mut entity = world.entity_mut(drone);
    let mut state = entity.get_mut::<Drone>().expect("drone");
    state.current_battery = battery;
    state.idle_since = idle_since;
}

/// Put `package` in flight on `drone` as if assignment had happened at `at`.
pub fn hold_drone(world: &mut World, package: Entity, drone: Entity, state: PackageState, at: SimTime) {
    {
        let mut facility = world.get_mut::<Facility>(drone).expect("facility");
        facility.seize(package);
    }
    world.get_mut::<Drone>(drone).expect("drone").idle_since = None;
    let mut p = world.get_mut::<Package>(package).expect("package");
    p.state = state;
    p.assigned_drone = Some(drone);
    p.assigned_at = Some(at);
}

pub fn schedule_for(world: &mut World, at: SimTime, kind: EventKind, package: Entity) {
    world
        .resource_mut::<SimulationClock>()
        .schedule_at(at, kind, Some(EventSubject::Package(package)));
}

pub fn package(world: &World, entity: Entity) -> Package {
    *world.get::<Package>(entity).expect("package")
}

pub fn drone(world: &World, entity: Entity) -> Drone {
    *world.get::<Drone>(entity).expect("drone")
}

/// All packages in spawn order.
pub fn packages(world: &World) -> Vec<Package> {
    world
        .iter_entities()
        .filter_map(|e| e.get::<Package>().copied())
        .collect()
}
