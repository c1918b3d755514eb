//! Battery accounting: projection for screening, recharge at assignment and
//! drain after each flight leg.

use crate::clock::SimTime;
use crate::ecs::Drone;

/// What the recharge step changed and how the idle period splits up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RechargeOutcome {
    /// Minutes since the drone became idle.
    pub idle_elapsed: SimTime,
    /// Meters of range added.
    pub delta: f64,
    /// Minutes spent actually charging.
    pub charging_time: SimTime,
    /// Minutes spent idle with a full battery.
    pub idle_waste: SimTime,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryModel {
    /// Range of a full battery in meters.
    pub max_battery: f64,
    /// Meters of range regained per idle minute.
    pub charge_rate: f64,
}

impl BatteryModel {
    pub fn new(max_battery: f64, charge_rate: f64) -> Self {
        Self {
            max_battery,
            charge_rate,
        }
    }

    fn idle_elapsed(idle_since: Option<SimTime>, now: SimTime) -> SimTime {
        idle_since.map_or(0.0, |since| (now - since).max(0.0))
    }

    /// Battery the drone would have if its idle time were credited now.
    ///
    /// Not capped at `max_battery`; the recharge step is.
    pub fn projected(&self, drone: &Drone, now: SimTime) -> f64 {
        self.projected_from(drone.current_battery, drone.idle_since, now)
    }

    /// [`Self::projected`] from a battery level and idle marker.
    pub fn projected_from(
        &self,
        current_battery: f64,
        idle_since: Option<SimTime>,
        now: SimTime,
    ) -> f64 {
        current_battery + Self::idle_elapsed(idle_since, now) * self.charge_rate
    }

    /// Credits the idle time to the battery, capped at `max_battery`.
    pub fn recharge(&self, drone: &mut Drone, now: SimTime) -> RechargeOutcome {
        let idle_elapsed = Self::idle_elapsed(drone.idle_since, now);
        let charged = self
            .max_battery
            .min(drone.current_battery + idle_elapsed * self.charge_rate);
        let delta = charged - drone.current_battery;
        drone.current_battery += delta;

        let charging_time = delta / self.charge_rate;
        let idle_waste = (idle_elapsed - charging_time).max(0.0);
        RechargeOutcome {
            idle_elapsed,
            delta,
            charging_time,
            idle_waste,
        }
    }

    /// Deducts one flight leg. No clamping at zero.
    pub fn drain(&self, drone: &mut Drone, meters: f64) {
        drone.current_battery -= meters;
    }
}
