//! Movement domain: construction-time failures.

use bevy::prelude::Entity;

/// Tuning could not be loaded or describes an unusable controller.
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid tuning field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A controller entity is missing something it cannot tick without.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("Controller {entity} is missing required component {component}")]
    MissingCollaborator {
        entity: Entity,
        component: &'static str,
    },
}
