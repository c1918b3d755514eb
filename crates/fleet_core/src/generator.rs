//! Package generator state: a single stream of packages with exponential
//! inter-arrival gaps that stops for good at the cutoff.

use bevy_ecs::prelude::Resource;

use crate::clock::SimTime;

#[derive(Debug, Clone, Default, Resource)]
pub struct PackageGenerator {
    /// Whether the first wake-up has been scheduled.
    pub initialized: bool,
    pub generated_count: u64,
    /// Next scheduled wake-up, if any.
    pub next_wake: Option<SimTime>,
    /// Set once a wake-up finds the clock at or past the cutoff.
    pub stopped: bool,
}

impl PackageGenerator {
    pub fn should_generate(&self, now: SimTime, cutoff: SimTime) -> bool {
        !self.stopped && now < cutoff
    }

    /// Count one package and compute the next wake-up `gap` minutes from `now`.
    pub fn advance(&mut self, now: SimTime, gap: SimTime) -> SimTime {
        self.generated_count += 1;
        let next = now + gap.max(0.0);
        self.next_wake = Some(next);
        next
    }

    pub fn stop(&mut self) {
        self.stopped = true;
        self.next_wake = None;
    }
}
