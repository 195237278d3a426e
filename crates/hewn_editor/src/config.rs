//! Placement preferences.
//!
//! Persistent settings shared by every placement tool, stored as TOML in
//! the user's config directory.

use std::path::{Path, PathBuf};

use hewn_geometry::Axis;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::scene::VisualizationMode;

/// Shortest box edge a bounds tool will turn into a generator.
pub const DEFAULT_MINIMUM_AXIS_LENGTH: f32 = 0.0001;

/// Settings applied to placement tools when they are built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementPreferences {
    /// Axis footprints are extruded along
    pub up_axis: Axis,
    /// Bounds shorter than this on every axis never become generators
    pub minimum_axis_length: f32,
    /// Outline mode forced while a placement tool is in use
    pub outline_mode: VisualizationMode,
    /// Select the generator once it is committed
    pub select_on_commit: bool,
    /// Segments used for curved preview outlines
    pub preview_segments: u32,
}

impl Default for PlacementPreferences {
    fn default() -> Self {
        Self {
            up_axis: Axis::Y,
            minimum_axis_length: DEFAULT_MINIMUM_AXIS_LENGTH,
            outline_mode: VisualizationMode::SimpleOutline,
            select_on_commit: true,
            preview_segments: 32,
        }
    }
}

impl PlacementPreferences {
    /// Load preferences from a file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let prefs: Self = toml::from_str(&content)?;
        log::info!("Loaded placement preferences from {:?}", path);
        Ok(prefs.sanitized())
    }

    /// Load preferences, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(err) => {
                log::warn!("Ignoring placement preferences at {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    /// Save preferences to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Saved placement preferences to {:?}", path);
        Ok(())
    }

    /// Get the default preferences path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("hewn");
            p.push("placement.toml");
            p
        })
    }

    fn sanitized(mut self) -> Self {
        if !self.minimum_axis_length.is_finite() || self.minimum_axis_length <= 0.0 {
            self.minimum_axis_length = DEFAULT_MINIMUM_AXIS_LENGTH;
        }
        self.preview_segments = self.preview_segments.clamp(3, 256);
        self
    }
}
