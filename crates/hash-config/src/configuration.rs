//! The rendering configuration described by a URL hash.

use serde::{Deserialize, Serialize};

/// Date value meaning "the most recent data available".
pub const CURRENT: &str = "current";

/// Projection used when the hash names none, or none that is known.
pub const DEFAULT_PROJECTION: &str = "orthographic";

/// Orientation of a freshly built configuration.
pub const DEFAULT_ORIENTATION: &str = "0,0,0";

/// Overlay type used when the hash names none. Always accepted by the parser.
pub const DEFAULT_OVERLAY: &str = "default";

/// Which data to show: when, which parameter, and at which surface and level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataSelection {
    /// `"current"` or `"yyyy/mm/dd"`.
    pub date: String,
    /// `"hhhh"`, or empty when the date is `"current"`.
    pub hour: String,
    /// Non-empty word characters, e.g. `"wind"`.
    pub param: String,
    /// Non-empty word characters, e.g. `"isobaric"`.
    pub surface: String,
    /// Non-empty word characters, e.g. `"1000hPa"`.
    pub level: String,
}

impl DataSelection {
    pub fn is_current(&self) -> bool {
        self.date == CURRENT
    }

    /// The date part of a hash: `"current"` or `"yyyy/mm/dd/hhhhZ"`.
    pub fn date_part(&self) -> String {
        if self.is_current() {
            CURRENT.to_string()
        } else {
            format!("{}/{}Z", self.date, self.hour)
        }
    }
}

/// A rendering configuration.
///
/// `selection` is present whenever the configuration came from a matching hash; a
/// configuration made by [`build_configuration`](crate::build_configuration) has none.
/// All other fields are always present. Serializes with the globe's field names
/// (`overlayType`, `showGridPoints`, ...) and the selection fields inlined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(flatten)]
    pub selection: Option<DataSelection>,
    pub projection: String,
    /// Comma delimited numbers such as `"26.50,-153.00,1430"`, or empty. Not validated.
    pub orientation: String,
    pub overlay_type: String,
    pub show_grid_points: bool,
    /// Topology resource path for the device class resolved at start-up.
    pub topology: String,
}

impl Configuration {
    /// The defaults a matching hash starts from before its options are applied.
    pub fn with_selection(selection: DataSelection, topology: &str) -> Self {
        Self {
            selection: Some(selection),
            projection: DEFAULT_PROJECTION.to_string(),
            orientation: String::new(),
            overlay_type: DEFAULT_OVERLAY.to_string(),
            show_grid_points: false,
            topology: topology.to_string(),
        }
    }

    pub fn date(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.date.as_str())
    }

    pub fn hour(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.hour.as_str())
    }

    pub fn param(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.param.as_str())
    }

    pub fn surface(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.surface.as_str())
    }

    pub fn level(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.level.as_str())
    }

    /// Renders the configuration as a URL hash, or `None` without a data selection.
    ///
    /// Options follow the order the globe writes them: overlay, projection, grid.
    /// The default overlay, an empty orientation and a hidden grid are omitted.
    pub fn to_hash(&self) -> Option<String> {
        let selection = self.selection.as_ref()?;
        let mut parts = vec![
            selection.date_part(),
            selection.param.clone(),
            selection.surface.clone(),
            selection.level.clone(),
        ];
        if !self.overlay_type.is_empty() && self.overlay_type != DEFAULT_OVERLAY {
            parts.push(format!("overlay={}", self.overlay_type));
        }
        match (self.projection.is_empty(), self.orientation.is_empty()) {
            (false, false) => parts.push(format!("{}={}", self.projection, self.orientation)),
            (false, true) => parts.push(self.projection.clone()),
            (true, false) => parts.push(self.orientation.clone()),
            (true, true) => {}
        }
        if self.show_grid_points {
            parts.push("grid=on".to_string());
        }
        Some(parts.join("/"))
    }
}
