//! Device class detection from a user agent string.
//!
//! The device class decides which topology resource the globe loads. It is resolved
//! once at start-up and handed to the hash parser explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topology resource for desktop browsers.
pub const DESKTOP_TOPOLOGY: &str = "/data/earth-topo.json?v2";

/// Lower-resolution topology resource for mobile devices.
pub const MOBILE_TOPOLOGY: &str = "/data/earth-topo-mobile.json?v2";

const MOBILE_AGENTS: &[&str] = &[
    "android",
    "blackberry",
    "iemobile",
    "ipad",
    "iphone",
    "ipod",
    "opera mini",
    "webos",
];

/// Broad class of the device the globe runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Classifies a user agent. Probably right; accuracy is not important.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let agent = user_agent.to_ascii_lowercase();
        if MOBILE_AGENTS.iter().any(|m| agent.contains(m)) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }

    /// Topology resource path for this device class.
    pub fn topology(&self) -> &'static str {
        match self {
            DeviceClass::Desktop => DESKTOP_TOPOLOGY,
            DeviceClass::Mobile => MOBILE_TOPOLOGY,
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceClass::Desktop => write!(f, "desktop"),
            DeviceClass::Mobile => write!(f, "mobile"),
        }
    }
}

/// True if the agent is probably Firefox.
pub fn is_firefox(user_agent: &str) -> bool {
    user_agent.to_ascii_lowercase().contains("firefox")
}
