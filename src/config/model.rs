//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial view and canvas settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default)]
    pub center_lng: f64,
    /// 0 shows the whole world; each level halves the visible span.
    #[serde(default)]
    pub zoom: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
    /// Fraction of the visible span moved per arrow key press.
    #[serde(default = "default_pan_step")]
    pub pan_step: f64,
    #[serde(default = "default_true")]
    pub high_resolution: bool,
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lng: 0.0,
            zoom: 0.0,
            max_zoom: default_max_zoom(),
            pan_step: default_pan_step(),
            high_resolution: true,
            attribution: default_attribution(),
        }
    }
}

/// UI behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            status_timeout_secs: default_status_timeout(),
            timestamp_format: default_timestamp_format(),
            mouse: true,
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("map center ({lat}, {lng}) is outside the globe")]
    InvalidCenter { lat: f64, lng: f64 },
    #[error("zoom {zoom} must be between 0 and max_zoom {max_zoom}")]
    InvalidZoom { zoom: f64, max_zoom: f64 },
    #[error("pan_step {0} must be in (0, 1]")]
    InvalidPanStep(f64),
    #[error("tick_rate_ms must be greater than zero")]
    ZeroTickRate,
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let map = &self.map;
        if !(-90.0..=90.0).contains(&map.center_lat) || !(-180.0..=180.0).contains(&map.center_lng)
        {
            return Err(ConfigError::InvalidCenter {
                lat: map.center_lat,
                lng: map.center_lng,
            });
        }
        if map.max_zoom < 0.0 || !(0.0..=map.max_zoom).contains(&map.zoom) {
            return Err(ConfigError::InvalidZoom {
                zoom: map.zoom,
                max_zoom: map.max_zoom,
            });
        }
        if !(map.pan_step > 0.0 && map.pan_step <= 1.0) {
            return Err(ConfigError::InvalidPanStep(map.pan_step));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::UnknownLogLevel(self.logging.level.clone()));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}
fn default_center_lat() -> f64 {
    20.0
}
fn default_max_zoom() -> f64 {
    6.0
}
fn default_pan_step() -> f64 {
    0.1
}
fn default_attribution() -> String {
    "World outline: ratatui canvas map".to_string()
}
fn default_tick_rate() -> u64 {
    50
}
fn default_status_timeout() -> u64 {
    4
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_file() -> String {
    "~/.local/share/travelio/travelio.log".to_string()
}
