use serde::{Deserialize, Serialize};
use crate::core::physics::Physics;

/// Scene graph configuration, provided by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// CSS fill used to clear the output surface every frame (default: "white").
    pub background: String,
    /// Physics used when a motion does not name one (default: Spring).
    pub default_physics: Physics,
    /// Initial sprite capacity of the graph (default: 64).
    pub initial_capacity: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: "white".to_string(),
            default_physics: Physics::Spring,
            initial_capacity: 64,
        }
    }
}

/// Where the status bar finds its DOM collaborators and which topic it posts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarConfig {
    /// Selector of the scrolling container (default: ".scrollable").
    pub scrollable_selector: String,
    /// Element whose height is the opaque threshold (default: "search").
    pub threshold_element_id: String,
    /// Message-channel topic for appearance changes.
    pub topic: String,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            scrollable_selector: ".scrollable".to_string(),
            threshold_element_id: "search".to_string(),
            topic: "change-appearance-statusbar".to_string(),
        }
    }
}

/// Top-level configuration for the homescreen helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomescreenConfig {
    pub scene: SceneConfig,
    pub status_bar: StatusBarConfig,
    /// Console log level: "error", "warn", "info", "debug" or "trace" (default: "info").
    pub log_level: String,
}

impl Default for HomescreenConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            status_bar: StatusBarConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl HomescreenConfig {
    /// Parse a configuration from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// `log_level` as a `log::Level`. Unknown names fall back to Info.
    pub fn max_log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

impl SceneConfig {
    /// Parse a scene configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl StatusBarConfig {
    /// Parse a status bar configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
