//! Lucent Theme System
//!
//! An adaptive theming engine: it senses the environment (time of day,
//! system color scheme, ambient light, battery), resolves a named base
//! theme into a fully adapted token set, memoizes the result under a
//! quantized context key, and applies it to a document as CSS custom
//! properties.
//!
//! # Pipeline
//!
//! ```text
//! SensorSuite -> ThemeContext -> resolve() -> ThemeCache -> DocumentApplier
//!                                    ^
//!                        ThemeRegistry (25 presets)
//! ```
//!
//! Every stage is total: capability reads degrade to documented defaults,
//! unknown theme names fall back to the default theme, and the applier
//! treats property writes as idempotent overwrites. The worst observable
//! outcome of a degraded signal is a slightly stale theme, never a crash.
//!
//! # Quick start
//!
//! ```rust
//! use lucent_theme::{
//!     EngineConfig, MemorySink, SensorSuite, ThemeEngine, DeviceProfile,
//! };
//! use std::time::Instant;
//!
//! let engine_sensors = SensorSuite::host();
//! let mut engine = ThemeEngine::new(
//!     EngineConfig::default(),
//!     engine_sensors,
//!     DeviceProfile::default(),
//!     MemorySink::new(),
//! );
//! let theme = engine.evaluate(Instant::now());
//! assert_eq!(theme.css_variables().len(), 28);
//! ```
//!
//! # CSS custom property contract
//!
//! Consumers read `--color-*`, `--typography-*`, `--spacing-*`,
//! `--animation-*`, and `--effect-*` from the document root; names and
//! shape are the binding contract between this pipeline and any styled
//! component.

pub mod apply;
pub mod cache;
pub mod config;
pub mod context;
pub mod engine;
pub mod perf;
pub mod prefs;
pub mod presets;
pub mod registry;
pub mod resolver;
pub mod responsive;
pub mod tokens;

#[cfg(feature = "scheduler")]
pub mod scheduler;

// Re-export commonly used types
pub use apply::{DocumentApplier, MemorySink, StyleSink, FADE_HOLD, FADE_OPACITY};
pub use cache::{CacheKey, ThemeCache, DEFAULT_CACHE_CAPACITY};
pub use config::EngineConfig;
pub use context::{
    AmbientLight, BatteryStatus, Capability, ColorScheme, SensorSuite, ThemeContext, TimeOfDay,
};
pub use engine::ThemeEngine;
pub use perf::{DeviceProfile, NetworkTier, PerformanceMode};
pub use prefs::{MemoryPrefStore, OptimizedState, PrefStore, Preferences};
pub use presets::ThemePreset;
pub use registry::{BaseTheme, ThemeRegistry, DEFAULT_THEME};
pub use resolver::{battery_saver_active, resolve, ResolveInputs, ResolvedTheme};
pub use responsive::{Breakpoints, DeviceClass, ResponsiveState};
pub use tokens::*;

#[cfg(feature = "scheduler")]
pub use scheduler::{spawn, SchedulerEvent, SchedulerHandle};
