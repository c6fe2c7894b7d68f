//! Resolved theme cache
//!
//! Memoizes resolver output under a quantized context key so minor signal
//! jitter (battery draining 83 -> 81, for instance) hits the cache instead
//! of recomputing. Bounded by an LRU so a long session drifting through
//! many contexts cannot grow without limit.

use crate::context::ThemeContext;
use crate::perf::PerformanceMode;
use crate::resolver::ResolvedTheme;
use crate::responsive::DeviceClass;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Default number of resolved themes kept resident
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

/// Quantized, stable serialization of the resolution inputs.
///
/// Battery level is rounded to the nearest 10 so jitter around a reading
/// does not fragment the key space. Plain rounding, no hysteresis: flapping
/// across a rounding boundary costs one extra resolve and both neighbor
/// entries stay resident in the LRU.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(
        context: &ThemeContext,
        theme_name: &str,
        device_class: DeviceClass,
        performance_mode: PerformanceMode,
        reduced_motion: bool,
    ) -> Self {
        let ambient = context
            .ambient_light
            .map(|a| a.as_str())
            .unwrap_or("none");
        let battery = match context.battery_level {
            Some(level) => quantize_battery(level),
            None => 100,
        };
        Self(format!(
            "{}|{}|{}|b{}|c{}|{}|{}|rm{}|{}",
            context.time_of_day.as_str(),
            context.system_scheme.as_str(),
            ambient,
            battery,
            u8::from(context.is_charging.unwrap_or(true)),
            device_class.as_str(),
            performance_mode.as_str(),
            u8::from(reduced_motion),
            theme_name,
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Round a battery percentage to the nearest 10
fn quantize_battery(level: u8) -> u8 {
    (((u16::from(level) + 5) / 10) * 10).min(100) as u8
}

/// Bounded memo of resolved themes
pub struct ThemeCache {
    entries: LruCache<CacheKey, Arc<ResolvedTheme>>,
}

impl ThemeCache {
    /// Cache with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Cache bounded to `capacity` entries (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Return the cached theme for `key`, computing and inserting it on a
    /// miss. For a resident key, `compute` is never invoked and the stored
    /// value is returned unchanged.
    pub fn get_or_compute(
        &mut self,
        key: CacheKey,
        compute: impl FnOnce() -> ResolvedTheme,
    ) -> Arc<ResolvedTheme> {
        if let Some(theme) = self.entries.get(&key) {
            tracing::trace!(key = key.as_str(), "theme cache hit");
            return Arc::clone(theme);
        }
        tracing::debug!(key = key.as_str(), "theme cache miss, resolving");
        let theme = Arc::new(compute());
        self.entries.put(key, Arc::clone(&theme));
        theme
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ThemeCache {
    fn default() -> Self {
        Self::new()
    }
}
