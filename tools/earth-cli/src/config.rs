//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use color_scales::ScaleSet;
use serde::{Deserialize, Serialize};

/// Known names and named scales, as the globe registers them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthConfig {
    /// Projection names accepted in hashes
    #[serde(default = "default_projections")]
    pub projections: Vec<String>,

    /// Overlay types accepted in hashes
    #[serde(default = "default_overlays")]
    pub overlays: Vec<String>,

    /// Named color scales
    #[serde(flatten)]
    pub scales: ScaleSet,
}

fn default_projections() -> Vec<String> {
    [
        "atlantis",
        "azimuthal_equidistant",
        "conic_equidistant",
        "equirectangular",
        "orthographic",
        "stereographic",
        "waterman",
        "winkel3",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_overlays() -> Vec<String> {
    [
        "off",
        "wind",
        "temp",
        "relative_humidity",
        "air_density",
        "wind_power_density",
        "total_precipitable_water",
        "total_cloud_water",
        "mean_sea_level_pressure",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for EarthConfig {
    fn default() -> Self {
        Self {
            projections: default_projections(),
            overlays: default_overlays(),
            scales: ScaleSet::default(),
        }
    }
}

impl EarthConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    /// Load from `path` when given, otherwise use the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_yaml(path),
            None => Ok(Self::default()),
        }
    }
}
