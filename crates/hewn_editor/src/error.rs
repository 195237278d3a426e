//! Error types for placement tools

use thiserror::Error;

use crate::scene::ObjectId;

/// Failures reported by a [`SceneHost`](crate::scene::SceneHost).
///
/// Tools never propagate these out of a frame; they log them and retry
/// with the next frame's geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// Object was never created or has already been destroyed
    #[error("Scene object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// The object factory refused to create a generator
    #[error("Failed to create {kind} generator: {reason}")]
    CreationFailed { kind: String, reason: String },
}

/// Result type for scene operations
pub type SceneResult<T> = std::result::Result<T, SceneError>;

/// Preferences loading and saving errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Preferences I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid preferences file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to encode preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for preferences operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
