//! Simulation runner: advances the clock and routes events into the ECS.
//!
//! Each step pops the next event from [SimulationClock], inserts it as
//! [CurrentEvent], then runs the schedule. Exactly one event-kind system acts
//! on it, so every step is atomic with respect to the others.

use bevy_ecs::prelude::{Res, Schedule, World};
use bevy_ecs::schedule::{apply_deferred, IntoSystemConfigs};

use crate::clock::{CurrentEvent, Event, EventKind, SimulationClock};
use crate::scenario::SimulationHorizon;
use crate::systems::{
    assignment::try_assign_drone_system,
    generator::{package_generator_system, simulation_started_system},
    loading::loading_complete_system,
    outbound::outbound_arrived_system,
    returning::return_arrived_system,
    unloading::unloading_complete_system,
};

fn is_simulation_started(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::SimulationStarted)
        .unwrap_or(false)
}

fn is_generate_package(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::GeneratePackage)
        .unwrap_or(false)
}

fn is_loading_complete(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::LoadingComplete)
        .unwrap_or(false)
}

fn is_try_assign_drone(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::TryAssignDrone)
        .unwrap_or(false)
}

fn is_outbound_arrived(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::OutboundArrived)
        .unwrap_or(false)
}

fn is_unloading_complete(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::UnloadingComplete)
        .unwrap_or(false)
}

fn is_return_arrived(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::ReturnArrived)
        .unwrap_or(false)
}

/// Runs one simulation step: pops the next event, inserts it as [CurrentEvent], then runs the schedule.
/// Returns `true` if an event was processed, `false` if the clock was empty or if the next event
/// is past [SimulationHorizon] (when that resource is present).
pub fn run_next_event(world: &mut World, schedule: &mut Schedule) -> bool {
    run_next_event_with_hook(world, schedule, |_, _| {})
}

/// Runs one simulation step and invokes `hook` after the schedule completes.
pub fn run_next_event_with_hook<F>(world: &mut World, schedule: &mut Schedule, mut hook: F) -> bool
where
    F: FnMut(&World, &Event),
{
    let horizon = world.get_resource::<SimulationHorizon>().map(|h| h.0);
    let next_ts = world
        .get_resource::<SimulationClock>()
        .and_then(|c| c.next_event_time());
    if let (Some(horizon), Some(ts)) = (horizon, next_ts) {
        if ts > horizon {
            return false;
        }
    }

    let event = match world.get_resource_mut::<SimulationClock>().and_then(|mut c| c.pop_next()) {
        Some(e) => e,
        None => return false,
    };
    world.insert_resource(CurrentEvent(event));

    schedule.run(world);
    hook(world, &event);
    true
}

/// Runs simulation steps until the horizon is reached, the event queue is empty,
/// or `max_steps` is reached. Returns the number of steps executed.
pub fn run_until_horizon(world: &mut World, schedule: &mut Schedule, max_steps: usize) -> usize {
    run_until_horizon_with_hook(world, schedule, max_steps, |_, _| {})
}

/// Runs simulation steps like [run_until_horizon] and invokes `hook` after each step.
pub fn run_until_horizon_with_hook<F>(
    world: &mut World,
    schedule: &mut Schedule,
    max_steps: usize,
    mut hook: F,
) -> usize
where
    F: FnMut(&World, &Event),
{
    let mut steps = 0;
    while steps < max_steps && run_next_event_with_hook(world, schedule, &mut hook) {
        steps += 1;
    }
    steps
}

/// Builds the simulation schedule: one system per event kind plus [apply_deferred]
/// so that spawned packages exist before their first event fires.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();

    schedule.add_systems((
        simulation_started_system.run_if(is_simulation_started),
        package_generator_system.run_if(is_generate_package),
        loading_complete_system.run_if(is_loading_complete),
        try_assign_drone_system.run_if(is_try_assign_drone),
        outbound_arrived_system.run_if(is_outbound_arrived),
        unloading_complete_system.run_if(is_unloading_complete),
        return_arrived_system.run_if(is_return_arrived),
        apply_deferred,
    ));

    schedule
}

/// Initializes the simulation by scheduling the SimulationStarted event at time 0.
/// Call this after building the scenario and before running events.
pub fn initialize_simulation(world: &mut World) {
    let mut clock = world.resource_mut::<SimulationClock>();
    clock.schedule_at(0.0, EventKind::SimulationStarted, None);
}
