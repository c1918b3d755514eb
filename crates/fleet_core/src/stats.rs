//! Statistics collector: running summaries of the sample streams the run
//! produces, plus the package counters.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

/// Running summary of one scalar sample stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    name: String,
    count: u64,
    min: f64,
    max: f64,
    sum: f64,
    sum_sq: f64,
}

impl Accumulator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            sum_sq: 0.0,
        }
    }

    pub fn record(&mut self, value: f64) {
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.sum_sq += value * value;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    /// Sample variance; zero for a single sample.
    pub fn variance(&self) -> Option<f64> {
        match self.count {
            0 => None,
            1 => Some(0.0),
            n => {
                let n = n as f64;
                let var = (self.sum_sq - self.sum * self.sum / n) / (n - 1.0);
                Some(var.max(0.0))
            }
        }
    }

    pub fn std_dev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    pub fn summary(&self) -> AccumulatorSummary {
        AccumulatorSummary {
            name: self.name.clone(),
            count: self.count,
            min: self.min(),
            max: self.max(),
            mean: self.mean(),
            std_dev: self.std_dev(),
        }
    }
}

/// Point-in-time view of an [`Accumulator`], used by the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccumulatorSummary {
    pub name: String,
    pub count: u64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
}

/// Collects simulation statistics. Inserted by the scenario builder.
#[derive(Debug, Clone, Resource)]
pub struct FleetStatistics {
    /// Creation to end of unloading, minutes.
    pub delivery_time: Accumulator,
    /// One-way destination distance, meters.
    pub distance: Accumulator,
    /// Idle minutes after the battery was already full.
    pub idle_when_charged: Accumulator,
    /// Minutes of charging credited at assignment.
    pub charging: Accumulator,
    /// Minutes in the air per round trip.
    pub flight: Accumulator,
    pub packages_created: u64,
    pub packages_delivered: u64,
}

impl Default for FleetStatistics {
    fn default() -> Self {
        Self {
            delivery_time: Accumulator::new("Delivery time (minutes)"),
            distance: Accumulator::new("Destination distance (metres)"),
            idle_when_charged: Accumulator::new("Idling fully charged (minutes)"),
            charging: Accumulator::new("Charging (minutes)"),
            flight: Accumulator::new("Drone in the air (minutes)"),
            packages_created: 0,
            packages_delivered: 0,
        }
    }
}

impl FleetStatistics {
    /// Accumulators in report order.
    pub fn accumulators(&self) -> [&Accumulator; 5] {
        [
            &self.flight,
            &self.charging,
            &self.idle_when_charged,
            &self.delivery_time,
            &self.distance,
        ]
    }
}
