use std::path::Path;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::battery::BatteryModel;
use crate::clock::SimTime;
use crate::error::ConfigError;

const DEFAULT_FLEET_SIZE: usize = 10;
/// Meters of range on a full battery.
const DEFAULT_MAX_BATTERY: f64 = 20_000.0;
/// Meters per minute; also battery consumption per minute of flight.
const DEFAULT_DRONE_SPEED: f64 = 1_878.0;
/// Meters of range regained per idle minute (about an hour from empty to full).
const DEFAULT_CHARGE_RATE: f64 = 332.0;
const DEFAULT_MAX_ONE_WAY_DISTANCE: f64 = 10_000.0;
/// Last minute a drone may leave.
const DEFAULT_LAST_DISPATCH_TIME: f64 = 622.0;
const DEFAULT_DISPATCH_MARGIN: f64 = 4.0;
/// Average minutes of sunlight per day.
const DEFAULT_DAYLIGHT_MINUTES: f64 = 633.0;

/// End of the simulated window. The runner stops before processing any event
/// scheduled after this time.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SimulationHorizon(pub SimTime);

/// Parameters of one simulated day. All times are minutes, all distances meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct FleetParams {
    pub fleet_size: usize,
    pub max_battery: f64,
    pub drone_speed: f64,
    pub charge_rate: f64,
    /// Package destinations are uniform in `[0, max_one_way_distance)`.
    pub max_one_way_distance: f64,
    pub last_dispatch_time: SimTime,
    /// Generation stops this many minutes before `last_dispatch_time`.
    pub dispatch_margin: SimTime,
    pub daylight_minutes: SimTime,
    /// Ground handling window: loading takes `uniform(load_min, load_max)`.
    pub load_min: SimTime,
    pub load_max: SimTime,
    pub unload_duration: SimTime,
    /// Poll interval while no drone can take the package.
    pub retry_interval: SimTime,
    /// Package arrivals per minute.
    pub arrival_rate: f64,
    /// Random seed for reproducibility (optional; if None, seeded from entropy).
    pub seed: Option<u64>,
}

impl Default for FleetParams {
    fn default() -> Self {
        Self {
            fleet_size: DEFAULT_FLEET_SIZE,
            max_battery: DEFAULT_MAX_BATTERY,
            drone_speed: DEFAULT_DRONE_SPEED,
            charge_rate: DEFAULT_CHARGE_RATE,
            max_one_way_distance: DEFAULT_MAX_ONE_WAY_DISTANCE,
            last_dispatch_time: DEFAULT_LAST_DISPATCH_TIME,
            dispatch_margin: DEFAULT_DISPATCH_MARGIN,
            daylight_minutes: DEFAULT_DAYLIGHT_MINUTES,
            load_min: 3.0,
            load_max: 4.0,
            unload_duration: 1.0,
            retry_interval: 1.0,
            arrival_rate: 1.0,
            seed: None,
        }
    }
}

impl FleetParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fleet_size(mut self, fleet_size: usize) -> Self {
        self.fleet_size = fleet_size;
        self
    }

    pub fn with_daylight_minutes(mut self, minutes: SimTime) -> Self {
        self.daylight_minutes = minutes;
        self
    }

    /// Set the last dispatch time; the cutoff follows at `time - dispatch_margin`.
    pub fn with_last_dispatch_time(mut self, time: SimTime) -> Self {
        self.last_dispatch_time = time;
        self
    }

    /// Time from which the generator stops creating packages.
    pub fn cutoff_time(&self) -> SimTime {
        self.last_dispatch_time - self.dispatch_margin
    }

    pub fn battery_model(&self) -> BatteryModel {
        BatteryModel::new(self.max_battery, self.charge_rate)
    }

    /// Minutes needed to fly `distance` meters.
    pub fn flight_time(&self, distance: f64) -> SimTime {
        distance / self.drone_speed
    }

    /// True when the longest possible round trip exceeds a full battery. Such
    /// trips can still pass selection, because the projection is uncapped,
    /// and then end with a negative battery.
    pub fn overruns_battery(&self) -> bool {
        2.0 * self.max_one_way_distance > self.max_battery
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fleet_size == 0 {
            return Err(invalid("fleet_size", "must be at least 1"));
        }
        positive("max_battery", self.max_battery)?;
        positive("drone_speed", self.drone_speed)?;
        positive("charge_rate", self.charge_rate)?;
        positive("retry_interval", self.retry_interval)?;
        positive("arrival_rate", self.arrival_rate)?;
        non_negative("max_one_way_distance", self.max_one_way_distance)?;
        non_negative("load_min", self.load_min)?;
        non_negative("unload_duration", self.unload_duration)?;
        non_negative("daylight_minutes", self.daylight_minutes)?;
        non_negative("dispatch_margin", self.dispatch_margin)?;
        finite("last_dispatch_time", self.last_dispatch_time)?;
        finite("load_max", self.load_max)?;
        if self.load_max < self.load_min {
            return Err(invalid(
                "load_max",
                format!("{} is below load_min {}", self.load_max, self.load_min),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is not finite")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(invalid(field, format!("{value} is negative")));
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(invalid(field, format!("{value} must be positive")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_daylight_window() {
        let params = FleetParams::default();
        assert_eq!(params.fleet_size, 10);
        assert_eq!(params.cutoff_time(), 618.0);
        assert_eq!(params.daylight_minutes, 633.0);
        assert!(!params.overruns_battery());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let params = FleetParams::from_json_str(r#"{ "fleet_size": 3, "seed": 9 }"#)
            .expect("valid config");
        assert_eq!(params.fleet_size, 3);
        assert_eq!(params.seed, Some(9));
        assert_eq!(params.max_battery, 20_000.0);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = FleetParams::from_json_str(r#"{ "charge_rate": 0 }"#).expect_err("zero rate");
        assert!(matches!(err, ConfigError::Invalid { field: "charge_rate", .. }));

        let err = FleetParams::from_json_str(r#"{ "load_min": 5, "load_max": 4 }"#)
            .expect_err("inverted load window");
        assert!(matches!(err, ConfigError::Invalid { field: "load_max", .. }));

        let err = FleetParams::default().with_fleet_size(0).validate().expect_err("empty fleet");
        assert!(matches!(err, ConfigError::Invalid { field: "fleet_size", .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = FleetParams::from_json_str("{ fleet_size: ").expect_err("bad json");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FleetParams::from_json_file("/definitely/not/here.json").expect_err("missing");
        match err {
            ConfigError::Io { path, .. } => assert!(path.ends_with("here.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
