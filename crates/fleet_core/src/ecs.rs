use bevy_ecs::prelude::{Component, Entity};

use crate::clock::SimTime;

/// Battery state of one drone. Ownership lives on the sibling
/// [`crate::facility::Facility`] component.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Drone {
    /// Position in the fleet scan order.
    pub index: usize,
    /// Remaining range in meters.
    pub current_battery: f64,
    /// When the drone last became free; `None` while it is out on a delivery.
    pub idle_since: Option<SimTime>,
}

impl Drone {
    /// A drone with the given battery, idle from the start of the window.
    pub fn new(index: usize, current_battery: f64) -> Self {
        Self {
            index,
            current_battery,
            idle_since: Some(0.0),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.idle_since.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageState {
    Created,
    Loading,
    AwaitingDrone,
    Outbound,
    Unloading,
    Delivered,
    Returning,
    Released,
}

impl PackageState {
    /// States in which the package holds a drone.
    pub fn holds_drone(self) -> bool {
        matches!(
            self,
            PackageState::Outbound
                | PackageState::Unloading
                | PackageState::Delivered
                | PackageState::Returning
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Package {
    pub state: PackageState,
    /// Distance to the destination in meters.
    pub distance_one_way: f64,
    pub time_created: SimTime,
    /// Drone handle into the fleet; set only while the package holds it.
    pub assigned_drone: Option<Entity>,
    /// Simulation time when a drone was seized; set in the assignment system.
    pub assigned_at: Option<SimTime>,
    /// Simulation time when unloading finished; set in the unloading system.
    pub delivered_at: Option<SimTime>,
    /// Simulation time when the drone was handed back; set in the return system.
    pub released_at: Option<SimTime>,
}

impl Package {
    pub fn new(distance_one_way: f64, time_created: SimTime) -> Self {
        Self {
            state: PackageState::Created,
            distance_one_way,
            time_created,
            assigned_drone: None,
            assigned_at: None,
            delivered_at: None,
            released_at: None,
        }
    }

    /// Battery budget a drone needs for this delivery.
    pub fn round_trip_distance(&self) -> f64 {
        2.0 * self.distance_one_way
    }

    pub fn delivery_time(&self) -> Option<SimTime> {
        self.delivered_at.map(|t| t - self.time_created)
    }
}
