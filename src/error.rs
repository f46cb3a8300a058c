//! Error types for the navigation tree crate.
//!
//! The tree view itself never fails: invalid rows and stale handles degrade to
//! no-ops or `None`. Errors only surface from the layers that touch the outside
//! world (configuration, snapshots, CLI arguments) and from the hierarchy
//! builder API.

use crate::hierarchy::ObjectId;
use thiserror::Error;

/// Errors raised while building or mutating a comparison hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("Stale object handle: {0}")]
    StaleHandle(ObjectId),

    #[error("Object {0} cannot own child items")]
    NotAContainer(ObjectId),

    #[error("Object {0} is a base folder, not a compared item")]
    NotAPairItem(ObjectId),
}

/// Top-level error type.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Snapshot error: {0}")]
    SnapshotError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Hierarchy error: {0}")]
    Hierarchy(#[from] HierarchyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
