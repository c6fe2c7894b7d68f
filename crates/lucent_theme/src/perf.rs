//! Performance mode selection
//!
//! `Auto` picks a concrete mode from a [`DeviceProfile`] captured once at
//! startup; the other modes pass through unchanged. The resolver only ever
//! sees a concrete mode.

use serde::{Deserialize, Serialize};

/// Network effective-type buckets, slowest first
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum NetworkTier {
    Slow2G,
    TwoG,
    ThreeG,
    FourG,
}

/// Static device capability snapshot read at startup
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceProfile {
    pub memory_gb: f32,
    pub logical_cores: usize,
    pub network: NetworkTier,
    pub reduced_motion: bool,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            memory_gb: 8.0,
            logical_cores: 8,
            network: NetworkTier::FourG,
            reduced_motion: false,
        }
    }
}

/// Styling-cost tier for animation and effect resolution
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceMode {
    Economy,
    Balanced,
    High,
    Auto,
}

impl PerformanceMode {
    /// Resolve `Auto` against a device profile; concrete modes pass through
    pub fn effective(self, profile: &DeviceProfile) -> PerformanceMode {
        match self {
            PerformanceMode::Auto => {
                if profile.memory_gb < 4.0
                    || profile.logical_cores <= 2
                    || profile.network <= NetworkTier::ThreeG
                {
                    PerformanceMode::Economy
                } else if profile.memory_gb >= 8.0 && profile.logical_cores >= 8 {
                    PerformanceMode::High
                } else {
                    PerformanceMode::Balanced
                }
            }
            mode => mode,
        }
    }

    /// Stable name used in cache keys
    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceMode::Economy => "economy",
            PerformanceMode::Balanced => "balanced",
            PerformanceMode::High => "high",
            PerformanceMode::Auto => "auto",
        }
    }
}

impl Default for PerformanceMode {
    fn default() -> Self {
        PerformanceMode::Balanced
    }
}
