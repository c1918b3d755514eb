//! Test helpers for common test setup and utilities.
//!
//! This module provides shared test utilities to reduce duplication across test files.

use std::collections::VecDeque;

use bevy_ecs::prelude::World;

use crate::distributions::{Sampler, SamplerResource};
use crate::scenario::{build_scenario_with_sampler, FleetParams};

/// Sampler that replays scripted draws and falls back to fixed values once a
/// script runs dry: `0.5` for `uniform01`, the lower bound for `uniform`, and
/// the mean `1 / rate` for `exponential`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSampler {
    uniform01: VecDeque<f64>,
    uniform: VecDeque<f64>,
    exponential: VecDeque<f64>,
}

impl ScriptedSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_uniform01(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.uniform01.extend(values);
        self
    }

    pub fn with_uniform(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.uniform.extend(values);
        self
    }

    pub fn with_exponential(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.exponential.extend(values);
        self
    }

    pub fn into_resource(self) -> SamplerResource {
        SamplerResource::new(Box::new(self))
    }
}

impl Sampler for ScriptedSampler {
    fn uniform01(&mut self) -> f64 {
        self.uniform01.pop_front().unwrap_or(0.5)
    }

    fn uniform(&mut self, low: f64, _high: f64) -> f64 {
        self.uniform.pop_front().unwrap_or(low)
    }

    fn exponential(&mut self, rate: f64) -> f64 {
        self.exponential.pop_front().unwrap_or_else(|| {
            if rate > 0.0 {
                1.0 / rate
            } else {
                f64::INFINITY
            }
        })
    }
}

/// Create a world with the scenario built from `params` and a scripted sampler.
///
/// # Panics
///
/// Panics if `params` fails validation.
pub fn create_test_world(params: FleetParams, sampler: ScriptedSampler) -> World {
    let mut world = World::new();
    build_scenario_with_sampler(&mut world, params, sampler.into_resource())
        .expect("test params should be valid");
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_values_then_fallbacks() {
        let mut sampler = ScriptedSampler::new()
            .with_uniform01([0.9])
            .with_uniform([3.25])
            .with_exponential([0.1]);
        assert_eq!(sampler.uniform01(), 0.9);
        assert_eq!(sampler.uniform01(), 0.5);
        assert_eq!(sampler.uniform(3.0, 4.0), 3.25);
        assert_eq!(sampler.uniform(3.0, 4.0), 3.0);
        assert_eq!(sampler.exponential(2.0), 0.1);
        assert_eq!(sampler.exponential(2.0), 0.5);
    }
}
