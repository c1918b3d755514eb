//! Simulation clock: the current time and the future-event heap.
//!
//! Time is measured in minutes since the start of the daylight window. Events
//! carry a sequence number so that events scheduled for the same timestamp pop
//! in the order they were scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::{Entity, Resource};

/// Simulation time in minutes.
pub type SimTime = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    SimulationStarted,
    GeneratePackage,
    LoadingComplete,
    TryAssignDrone,
    OutboundArrived,
    UnloadingComplete,
    ReturnArrived,
}

/// Entity an event is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSubject {
    Package(Entity),
}

#[derive(Debug, Clone, Copy)]
pub struct Event {
    pub timestamp: SimTime,
    pub seq: u64,
    pub kind: EventKind,
    pub subject: Option<EventSubject>,
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by (timestamp, seq).
        other
            .timestamp
            .total_cmp(&self.timestamp)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Event {}

/// The event currently being processed by the schedule.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentEvent(pub Event);

#[derive(Debug, Default, Resource)]
pub struct SimulationClock {
    now: SimTime,
    events: BinaryHeap<Event>,
    next_seq: u64,
}

impl SimulationClock {
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Schedule an event at an absolute simulation time.
    pub fn schedule_at(&mut self, timestamp: SimTime, kind: EventKind, subject: Option<EventSubject>) {
        debug_assert!(
            timestamp >= self.now,
            "event timestamp must be >= current time"
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.push(Event {
            timestamp,
            seq,
            kind,
            subject,
        });
    }

    /// Schedule an event `delay` minutes from now.
    pub fn schedule_in(&mut self, delay: SimTime, kind: EventKind, subject: Option<EventSubject>) {
        self.schedule_at(self.now + delay.max(0.0), kind, subject);
    }

    /// Removes the earliest event and advances the clock to its timestamp.
    pub fn pop_next(&mut self) -> Option<Event> {
        let event = self.events.pop()?;
        self.now = event.timestamp;
        Some(event)
    }

    pub fn next_event_time(&self) -> Option<SimTime> {
        self.events.peek().map(|e| e.timestamp)
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
