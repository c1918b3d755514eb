//! End-of-run report: per-accumulator summaries and package totals.

use std::fmt;

use bevy_ecs::prelude::World;
use serde::Serialize;

use crate::clock::{SimTime, SimulationClock};
use crate::ecs::{Package, PackageState};
use crate::fleet::Fleet;
use crate::stats::{AccumulatorSummary, FleetStatistics};

const RULE: &str = "+----------------------------------------------------------+";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetReport {
    /// Flight, charging, idle when charged, delivery time, distance.
    pub statistics: Vec<AccumulatorSummary>,
    pub fleet_size: usize,
    pub packages_delivered: u64,
    pub packages_created: u64,
    /// Packages still waiting for a drone when the run ended.
    pub packages_awaiting_drone: usize,
    /// Packages holding a drone when the run ended.
    pub packages_in_flight: usize,
    pub final_time: SimTime,
}

impl FleetReport {
    /// Extract the report from a finished world. Returns `None` if the world
    /// was not built by [`crate::scenario::build_scenario`].
    pub fn from_world(world: &mut World) -> Option<Self> {
        let (awaiting, in_flight) = world
            .query::<&Package>()
            .iter(world)
            .fold((0, 0), |(awaiting, in_flight), package| {
                (
                    awaiting + usize::from(package.state == PackageState::AwaitingDrone),
                    in_flight + usize::from(package.state.holds_drone()),
                )
            });

        let stats = world.get_resource::<FleetStatistics>()?;
        let fleet = world.get_resource::<Fleet>()?;
        let clock = world.get_resource::<SimulationClock>()?;

        Some(Self {
            statistics: stats.accumulators().iter().map(|a| a.summary()).collect(),
            fleet_size: fleet.len(),
            packages_delivered: stats.packages_delivered,
            packages_created: stats.packages_created,
            packages_awaiting_drone: awaiting,
            packages_in_flight: in_flight,
            final_time: clock.now(),
        })
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, summary: &AccumulatorSummary) -> fmt::Result {
    writeln!(f, "{RULE}")?;
    writeln!(f, "| STATISTIC {}", summary.name)?;
    writeln!(f, "{RULE}")?;
    match (summary.min, summary.max, summary.mean) {
        (Some(min), Some(max), Some(mean)) => {
            writeln!(f, "|  Min = {min:.4}   Max = {max:.4}")?;
            writeln!(f, "|  Number of records = {}", summary.count)?;
            writeln!(f, "|  Average value = {mean:.4}")?;
            if let Some(std_dev) = summary.std_dev {
                writeln!(f, "|  Standard deviation = {std_dev:.4}")?;
            }
        }
        _ => writeln!(f, "|  (no record)")?,
    }
    writeln!(f, "{RULE}")
}

impl fmt::Display for FleetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for summary in &self.statistics {
            write_summary(f, summary)?;
        }
        writeln!(f, "-------------------------------------------------------------")?;
        writeln!(f, "Drones:\t\t\t{}", self.fleet_size)?;
        writeln!(f, "Packages delivered:\t{}", self.packages_delivered)?;
        write!(f, "Packages created:\t{}", self.packages_created)
    }
}
