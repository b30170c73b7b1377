//! Declarative scale definitions loaded from JSON or YAML.
//!
//! ```json
//! {
//!   "scales": {
//!     "temp": {
//!       "type": "segmented",
//!       "units": "K",
//!       "segments": [[193, [37, 4, 42]], [233.15, [192, 37, 149]], [328, [255, 255, 255]]]
//!     },
//!     "wind": { "type": "extended_sinebow", "bounds": [0, 100] }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use earth_common::{proportion, EarthError, EarthResult};
use serde::{Deserialize, Serialize};

use crate::color::ColorScale;
use crate::segmented::{Breakpoint, SegmentedColorScale};
use crate::sinebow::{extended_sinebow_color, sinebow_color, ExtendedSinebow, Sinebow};

/// A named collection of scale definitions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScaleSet {
    #[serde(default)]
    pub scales: HashMap<String, ScaleDefinition>,
}

/// A single scale definition.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScaleDefinition {
    /// Piecewise linear scale through `[value, [r, g, b]]` breakpoints.
    Segmented {
        #[serde(default)]
        units: Option<String>,
        segments: Vec<Breakpoint>,
    },
    /// The sinebow spectrum. Samples are normalized into `bounds` first when given.
    Sinebow {
        #[serde(default)]
        bounds: Option<[f64; 2]>,
    },
    /// The sinebow spectrum fading to white past 0.45.
    ExtendedSinebow {
        #[serde(default)]
        bounds: Option<[f64; 2]>,
    },
}

impl ScaleDefinition {
    /// Validates the definition and builds an executable scale.
    pub fn build(&self) -> EarthResult<Box<dyn ColorScale>> {
        match self {
            ScaleDefinition::Segmented { segments, .. } => {
                Ok(Box::new(SegmentedColorScale::new(segments)?))
            }
            ScaleDefinition::Sinebow { bounds: None } => Ok(Box::new(Sinebow)),
            ScaleDefinition::Sinebow { bounds: Some(b) } => {
                let [low, high] = check_bounds(b)?;
                Ok(Box::new(move |point: f64, alpha: f64| {
                    sinebow_color(proportion(point, low, high), alpha)
                }))
            }
            ScaleDefinition::ExtendedSinebow { bounds: None } => Ok(Box::new(ExtendedSinebow)),
            ScaleDefinition::ExtendedSinebow { bounds: Some(b) } => {
                let [low, high] = check_bounds(b)?;
                Ok(Box::new(move |point: f64, alpha: f64| {
                    extended_sinebow_color(proportion(point, low, high), alpha)
                }))
            }
        }
    }
}

fn check_bounds(bounds: &[f64; 2]) -> EarthResult<[f64; 2]> {
    let [low, high] = *bounds;
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(EarthError::InvalidScale(format!(
            "bounds must be finite with low < high, got [{}, {}]",
            low, high
        )));
    }
    Ok([low, high])
}

impl ScaleSet {
    pub fn from_json(json_str: &str) -> EarthResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    pub fn from_yaml(yaml_str: &str) -> EarthResult<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Loads a scale set, choosing the format from the file extension (YAML for
    /// `.yaml`/`.yml`, JSON otherwise).
    pub fn from_file<P: AsRef<Path>>(path: P) -> EarthResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ScaleDefinition> {
        self.scales.get(name)
    }

    /// Builds the named scale.
    pub fn build(&self, name: &str) -> EarthResult<Box<dyn ColorScale>> {
        self.get(name)
            .ok_or_else(|| {
                let mut available: Vec<_> = self.scales.keys().cloned().collect();
                available.sort();
                EarthError::ConfigError(format!(
                    "Scale '{}' not found. Available scales: {:?}",
                    name, available
                ))
            })?
            .build()
    }
}
