//! Theme engine
//!
//! One [`ThemeEngine`] owns the whole pipeline for a document: sensors,
//! registry, cache, and applier. `evaluate` runs a single pass (sense ->
//! resolve-with-cache -> apply); the scheduler drives passes on a timer and
//! on events, and tests drive them directly.

use crate::apply::{DocumentApplier, StyleSink};
use crate::cache::{CacheKey, ThemeCache};
use crate::config::EngineConfig;
use crate::context::{ColorScheme, SensorSuite, ThemeContext};
use crate::perf::DeviceProfile;
use crate::registry::ThemeRegistry;
use crate::resolver::{resolve, ResolveInputs, ResolvedTheme};
use crate::responsive::ResponsiveState;
use std::sync::Arc;
use std::time::Instant;

pub struct ThemeEngine<S: StyleSink> {
    config: EngineConfig,
    registry: ThemeRegistry,
    cache: ThemeCache,
    applier: DocumentApplier<S>,
    sensors: SensorSuite,
    profile: DeviceProfile,
    responsive: ResponsiveState,
    /// Host-forced scheme, taking precedence over the sensed one
    scheme_override: Option<ColorScheme>,
}

impl<S: StyleSink> ThemeEngine<S> {
    pub fn new(config: EngineConfig, sensors: SensorSuite, profile: DeviceProfile, sink: S) -> Self {
        let cache = ThemeCache::with_capacity(config.cache_capacity);
        Self {
            config,
            registry: ThemeRegistry::builtin(),
            cache,
            applier: DocumentApplier::new(sink),
            sensors,
            profile,
            responsive: ResponsiveState::default(),
            scheme_override: None,
        }
    }

    /// Run one full pipeline pass at `now` and return the resolved theme.
    ///
    /// The first pass applies immediately; later passes fade when smooth
    /// transitions are configured. Capability failures inside the pass are
    /// absorbed by sensor defaults - a pass never fails.
    pub fn evaluate(&mut self, now: Instant) -> Arc<ResolvedTheme> {
        let context = self.sense();
        let mode = self.config.performance_mode.effective(&self.profile);
        let responsive = if self.config.responsive {
            self.responsive
        } else {
            ResponsiveState::default()
        };

        let key = CacheKey::new(
            &context,
            &self.config.theme,
            responsive.device_class,
            mode,
            self.profile.reduced_motion,
        );
        let inputs = ResolveInputs {
            context: &context,
            theme_name: &self.config.theme,
            responsive,
            performance_mode: mode,
            reduced_motion: self.profile.reduced_motion,
            adapt_to_time: self.config.adapt_to_time,
        };
        let registry = &self.registry;
        let theme = self.cache.get_or_compute(key, || resolve(registry, &inputs));

        let smooth = self.config.smooth_transitions && self.applier.applied().is_some();
        self.applier.apply(Arc::clone(&theme), smooth, now);
        theme
    }

    fn sense(&self) -> ThemeContext {
        let mut context = self.sensors.read_context(&self.config);
        context.system_scheme = match (self.scheme_override, self.config.auto_dark) {
            (Some(forced), _) => forced,
            (None, true) => context.system_scheme,
            (None, false) => ColorScheme::Light,
        };
        context
    }

    /// Advance an in-flight fade; returns `true` if a theme landed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.applier.tick(now)
    }

    // ========== Host surface ==========

    pub fn set_theme(&mut self, name: impl Into<String>) {
        self.config.theme = name.into();
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.responsive = ResponsiveState::for_width(width);
    }

    /// Force a scheme regardless of the sensed system value; `None` returns
    /// control to the sensor
    pub fn force_scheme(&mut self, scheme: Option<ColorScheme>) {
        self.scheme_override = scheme;
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.profile.reduced_motion = reduced;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn applier(&self) -> &DocumentApplier<S> {
        &self.applier
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
