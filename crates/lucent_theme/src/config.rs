//! Engine configuration

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::perf::PerformanceMode;
use lucent_core::LucentError;
use serde::{Deserialize, Serialize};

/// Host-facing configuration for the theming pipeline.
///
/// Loads from TOML; every field has a default so an empty document is a
/// valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Theme name drawn from the registry; unknown names fall back to the
    /// default theme at resolve time
    pub theme: String,
    /// Follow the system dark scheme; when off the engine stays light
    /// unless the host forces a scheme explicitly
    pub auto_dark: bool,
    /// Derive typography/spacing from the viewport; when off the desktop
    /// scale is used everywhere
    pub responsive: bool,
    pub adapt_to_time: bool,
    pub adapt_to_system_theme: bool,
    pub adapt_to_ambient_light: bool,
    pub performance_mode: PerformanceMode,
    /// Fade between themes instead of swapping instantly
    pub smooth_transitions: bool,
    /// Seconds between scheduled re-evaluations
    pub interval_secs: u64,
    /// Bound on resident resolved themes
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            theme: "velora".to_string(),
            auto_dark: true,
            responsive: true,
            adapt_to_time: true,
            adapt_to_system_theme: true,
            adapt_to_ambient_light: false,
            performance_mode: PerformanceMode::Auto,
            smooth_transitions: true,
            interval_secs: 60,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document, filling omitted fields from defaults
    pub fn from_toml(input: &str) -> Result<Self, LucentError> {
        toml::from_str(input).map_err(|e| LucentError::Config(e.to_string()))
    }
}
