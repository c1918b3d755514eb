#![allow(dead_code)]

use bevy_ecs::prelude::{Entity, World};
use fleet_core::fleet::Fleet;
use fleet_core::scenario::{build_scenario, FleetParams};
use fleet_core::test_helpers::{create_test_world, ScriptedSampler};

/// Helper that builds a scenario world for integration tests.
#[derive(Debug, Default)]
pub struct TestWorldBuilder {
    params: FleetParams,
    sampler: Option<ScriptedSampler>,
}

impl TestWorldBuilder {
    /// Create a new builder with the default daylight parameters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(mut self, params: FleetParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_fleet_size(mut self, fleet_size: usize) -> Self {
        self.params.fleet_size = fleet_size;
        self
    }

    /// Use a seeded RNG instead of scripted draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.params.seed = Some(seed);
        self.sampler = None;
        self
    }

    /// Replay the given draws; unscripted draws fall back to fixed values.
    pub fn with_sampler(mut self, sampler: ScriptedSampler) -> Self {
        self.sampler = Some(sampler);
        self
    }

    /// Build the ECS world with all scenario resources.
    pub fn build(self) -> World {
        match self.sampler {
            Some(sampler) => create_test_world(self.params, sampler),
            None => {
                let mut world = World::new();
                build_scenario(&mut world, self.params).expect("test params should be valid");
                world
            }
        }
    }
}

/// Drone entity at `index` in fleet order.
pub fn drone_at(world: &World, index: usize) -> Entity {
    world.resource::<Fleet>().drones()[index]
}
