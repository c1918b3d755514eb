pub mod battery;
pub mod clock;
pub mod distributions;
pub mod ecs;
pub mod error;
pub mod facility;
pub mod fleet;
pub mod generator;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod stats;
pub mod systems;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
