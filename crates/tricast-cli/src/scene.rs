//! Scene files: three triangle corners and two ray markers.
//!
//! A scene is read from TOML or JSON (chosen by file extension) into a
//! [`SceneConfig`], then validated into a [`Scene`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tricast_math::{Point3, Tolerance};
use tricast_raytrace::{GeometryProvider, Intersector};

/// Errors raised while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown scene format: {0:?} (expected .toml or .json)")]
    UnknownFormat(String),
    #[error("must have 3 triangle corners, found {0}")]
    CornerCount(usize),
    #[error("must have 2 ray markers, found {0}")]
    MarkerCount(usize),
    #[error("epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f64),
}

/// Scene file contents, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Triangle corner positions.
    pub triangle_corners: Vec<[f64; 3]>,
    /// Ray start marker, then aim marker.
    pub ray_markers: Vec<[f64; 3]>,
    /// Intersection epsilon; defaults to 1e-6.
    #[serde(default)]
    pub epsilon: Option<f64>,
}

/// A validated scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub corners: [Point3; 3],
    pub markers: [Point3; 2],
    pub tolerance: Tolerance,
}

impl Scene {
    /// Validate a config: exactly 3 corners, exactly 2 markers, sane epsilon.
    pub fn from_config(config: &SceneConfig) -> Result<Self, SceneError> {
        let corners: [[f64; 3]; 3] = config
            .triangle_corners
            .as_slice()
            .try_into()
            .map_err(|_| SceneError::CornerCount(config.triangle_corners.len()))?;
        let markers: [[f64; 3]; 2] = config
            .ray_markers
            .as_slice()
            .try_into()
            .map_err(|_| SceneError::MarkerCount(config.ray_markers.len()))?;

        let tolerance = match config.epsilon {
            Some(eps) => Tolerance::new(eps),
            None => Tolerance::DEFAULT,
        };
        if !tolerance.is_valid() {
            return Err(SceneError::InvalidEpsilon(tolerance.epsilon));
        }

        Ok(Self {
            corners: corners.map(Point3::from),
            markers: markers.map(Point3::from),
            tolerance,
        })
    }

    /// Parse and validate a TOML scene.
    pub fn from_toml_str(s: &str) -> Result<Self, SceneError> {
        let config: SceneConfig = toml::from_str(s)?;
        Self::from_config(&config)
    }

    /// Parse and validate a JSON scene.
    pub fn from_json_str(s: &str) -> Result<Self, SceneError> {
        let config: SceneConfig = serde_json::from_str(s)?;
        Self::from_config(&config)
    }

    /// Load a scene file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loading {} scene from {}", ext, path.display());

        match ext.as_str() {
            "toml" => Self::from_toml_str(&text),
            "json" => Self::from_json_str(&text),
            _ => Err(SceneError::UnknownFormat(ext)),
        }
    }

    /// Intersector configured with this scene's tolerance.
    pub fn intersector(&self) -> Intersector {
        Intersector::new(self.tolerance)
    }
}

impl GeometryProvider for Scene {
    fn triangle_vertices(&self) -> (Point3, Point3, Point3) {
        (self.corners[0], self.corners[1], self.corners[2])
    }

    fn ray_endpoints(&self) -> (Point3, Point3) {
        (self.markers[0], self.markers[1])
    }
}
