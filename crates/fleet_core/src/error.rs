//! Error types for configuration loading and kernel misuse.

use std::path::PathBuf;

use bevy_ecs::prelude::Entity;
use thiserror::Error;

/// Errors raised while loading or validating [`crate::scenario::FleetParams`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid parameter `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors raised by [`crate::facility::Facility`] ownership transfer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityError {
    #[error("facility is not held by {requester:?} (holder: {holder:?})")]
    NotHeld {
        requester: Entity,
        holder: Option<Entity>,
    },
}
