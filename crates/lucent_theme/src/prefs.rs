//! User preference persistence
//!
//! A couple of host-level flags (high contrast, persisted optimization
//! state) survive across sessions as key -> JSON blobs. This sits outside
//! the resolution pipeline; the engine never reads it implicitly.

use crate::perf::PerformanceMode;
use lucent_core::LucentError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

const HIGH_CONTRAST_KEY: &str = "lucent.high-contrast";
const OPTIMIZED_STATE_KEY: &str = "lucent.optimized-state";

/// Backing store for preference blobs (browser local storage, a file, or
/// memory in tests)
pub trait PrefStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), LucentError>;
}

/// In-memory store for tests and ephemeral hosts
#[derive(Default)]
pub struct MemoryPrefStore {
    entries: FxHashMap<String, String>,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), LucentError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Snapshot of the optimizer's last decisions, persisted so a returning
/// session starts from the adapted state instead of re-probing
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizedState {
    pub performance_mode: Option<PerformanceMode>,
    pub reduced_effects: bool,
}

/// Typed access to the preference blobs
pub struct Preferences<P: PrefStore> {
    store: P,
}

impl<P: PrefStore> Preferences<P> {
    pub fn new(store: P) -> Self {
        Self { store }
    }

    /// High-contrast flag; absent or malformed reads as off
    pub fn high_contrast(&self) -> bool {
        self.store
            .load(HIGH_CONTRAST_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(false)
    }

    pub fn set_high_contrast(&mut self, enabled: bool) -> Result<(), LucentError> {
        let raw = serde_json::to_string(&enabled).map_err(|e| LucentError::Prefs(e.to_string()))?;
        self.store.save(HIGH_CONTRAST_KEY, &raw)
    }

    /// Persisted optimizer state; absent or malformed reads as default
    pub fn optimized_state(&self) -> OptimizedState {
        self.store
            .load(OPTIMIZED_STATE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn set_optimized_state(&mut self, state: &OptimizedState) -> Result<(), LucentError> {
        let raw = serde_json::to_string(state).map_err(|e| LucentError::Prefs(e.to_string()))?;
        self.store.save(OPTIMIZED_STATE_KEY, &raw)
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}
