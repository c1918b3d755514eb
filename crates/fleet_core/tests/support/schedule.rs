#![allow(dead_code)]

use bevy_ecs::prelude::World;
use bevy_ecs::schedule::Schedule;
use fleet_core::clock::Event;
use fleet_core::runner::{
    initialize_simulation, run_next_event, run_until_horizon, run_until_horizon_with_hook,
    simulation_schedule,
};

/// Helper that owns a reusable `Schedule` so tests can step or drain the event queue.
pub struct ScheduleRunner {
    schedule: Schedule,
}

impl Default for ScheduleRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleRunner {
    /// Create a runner with the default simulation schedule.
    pub fn new() -> Self {
        Self {
            schedule: simulation_schedule(),
        }
    }

    /// Run a single event (returns `true` if an event was processed).
    pub fn run_one(&mut self, world: &mut World) -> bool {
        run_next_event(world, &mut self.schedule)
    }

    /// Run up to `max_steps` events, returning the number of steps executed.
    pub fn run_steps(&mut self, world: &mut World, max_steps: usize) -> usize {
        run_until_horizon(world, &mut self.schedule, max_steps)
    }

    /// Start the generator and drive the day to its horizon.
    pub fn run_day(&mut self, world: &mut World) -> usize {
        initialize_simulation(world);
        run_until_horizon(world, &mut self.schedule, usize::MAX)
    }

    /// Like [`Self::run_day`] with `hook` called after every step.
    pub fn run_day_with_hook<F>(&mut self, world: &mut World, hook: F) -> usize
    where
        F: FnMut(&World, &Event),
    {
        initialize_simulation(world);
        run_until_horizon_with_hook(world, &mut self.schedule, usize::MAX, hook)
    }
}
