//! The drone fleet and the drone-selection seam.

use std::ops::Deref;

use bevy_ecs::prelude::{Entity, Resource};

use crate::battery::BatteryModel;
use crate::clock::SimTime;
use crate::ecs::Drone;
use crate::facility::Facility;

/// Owned, ordered list of drone entities. The order is the scan order used
/// by selection and never changes during a run.
#[derive(Debug, Clone, Default, Resource)]
pub struct Fleet {
    drones: Vec<Entity>,
}

impl Fleet {
    pub fn new(drones: Vec<Entity>) -> Self {
        Self { drones }
    }

    pub fn drones(&self) -> &[Entity] {
        &self.drones
    }

    pub fn len(&self) -> usize {
        self.drones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drones.is_empty()
    }
}

/// Snapshot of one drone as seen by a selection algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneCandidate {
    pub entity: Entity,
    pub busy: bool,
    pub current_battery: f64,
    pub idle_since: Option<SimTime>,
}

impl DroneCandidate {
    pub fn from_parts(entity: Entity, drone: &Drone, facility: &Facility) -> Self {
        Self {
            entity,
            busy: facility.is_busy(),
            current_battery: drone.current_battery,
            idle_since: drone.idle_since,
        }
    }

    pub fn projected_battery(&self, battery: &BatteryModel, now: SimTime) -> f64 {
        battery.projected_from(self.current_battery, self.idle_since, now)
    }
}

/// Trait for algorithms picking the drone that serves a package.
pub trait DroneSelection: Send + Sync {
    /// Returns a drone able to cover `required_distance` meters, or `None`.
    ///
    /// `candidates` is in fleet order and includes busy drones; implementations
    /// must never return a busy one.
    fn select(
        &self,
        candidates: &[DroneCandidate],
        required_distance: f64,
        battery: &BatteryModel,
        now: SimTime,
    ) -> Option<Entity>;
}

/// First-fit selection: the first free drone, in fleet order, whose projected
/// battery covers the distance. Later drones are not considered even if they
/// would be a tighter fit.
#[derive(Debug, Default)]
pub struct FirstFitSelection;

impl DroneSelection for FirstFitSelection {
    fn select(
        &self,
        candidates: &[DroneCandidate],
        required_distance: f64,
        battery: &BatteryModel,
        now: SimTime,
    ) -> Option<Entity> {
        candidates
            .iter()
            .filter(|candidate| !candidate.busy)
            .find(|candidate| candidate.projected_battery(battery, now) >= required_distance)
            .map(|candidate| candidate.entity)
    }
}

/// Resource wrapper for the selection trait object.
#[derive(Resource)]
pub struct DroneSelectionResource(pub Box<dyn DroneSelection>);

impl DroneSelectionResource {
    pub fn new(selection: Box<dyn DroneSelection>) -> Self {
        Self(selection)
    }

    pub fn first_fit() -> Self {
        Self::new(Box::new(FirstFitSelection))
    }
}

impl Deref for DroneSelectionResource {
    type Target = dyn DroneSelection;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
