use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::GridMapping;

/// Smallest accepted `grid_scale`, in pixels per grid unit.
pub const MIN_GRID_SCALE: f32 = 1.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Tunables of the editor, the previews and the showcase viewer.
///
/// Missing fields in a config file take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas pixels per grid unit.
    pub grid_scale: f32,
    /// Pointer-to-element distance (grid units) below which a click selects.
    pub hit_radius: f32,
    /// Thickness given to newly drawn walls, in grid units.
    pub wall_thickness: f32,
    /// World units per grid unit in the 3D preview.
    pub world_scale: f32,
    /// Height of extruded walls in world units.
    pub wall_height: f32,
    /// Size of the 2D drawing surface in pixels.
    pub canvas_size: [f32; 2],
    /// Preview rotation per 60 Hz frame, in radians.
    pub spin_per_frame: f32,
    /// Model shown by the showcase viewer.
    pub showcase_model: String,
    /// Largest dimension the showcase model is scaled to.
    pub fit_size: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_scale: 20.0,
            hit_radius: 0.8,
            wall_thickness: 0.2,
            world_scale: 0.1,
            wall_height: 1.0,
            canvas_size: [1200.0, 600.0],
            spin_per_frame: 0.003,
            showcase_model: "Models/17.glb".to_owned(),
            fit_size: 2.5,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("grid_scale", self.grid_scale),
            ("world_scale", self.world_scale),
            ("canvas_size[0]", self.canvas_size[0]),
            ("canvas_size[1]", self.canvas_size[1]),
            ("fit_size", self.fit_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.grid_scale < MIN_GRID_SCALE {
            return Err(ConfigError::Invalid(format!(
                "grid_scale must be at least {MIN_GRID_SCALE}, got {}",
                self.grid_scale
            )));
        }

        let non_negative = [
            ("hit_radius", self.hit_radius),
            ("wall_thickness", self.wall_thickness),
            ("wall_height", self.wall_height),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be >= 0, got {value}")));
            }
        }

        if !self.spin_per_frame.is_finite() {
            return Err(ConfigError::Invalid("spin_per_frame must be finite".into()));
        }
        Ok(())
    }

    pub fn grid_mapping(&self) -> GridMapping {
        GridMapping::new(self.grid_scale)
    }
}
