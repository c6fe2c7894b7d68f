use lucent_theme::{
    BatteryStatus, ColorScheme, DeviceProfile, EngineConfig, MemorySink, PerformanceMode,
    SensorSuite, StyleSink, ThemeEngine, FADE_HOLD,
};
use std::time::{Duration, Instant};

fn fixed_sensors() -> SensorSuite {
    SensorSuite::fixed(
        14,
        ColorScheme::Light,
        None,
        Some(BatteryStatus {
            level: 90,
            charging: true,
        }),
    )
}

fn engine(config: EngineConfig) -> ThemeEngine<MemorySink> {
    ThemeEngine::new(
        config,
        fixed_sensors(),
        DeviceProfile::default(),
        MemorySink::new(),
    )
}

#[test]
fn first_pass_applies_immediately() {
    let mut engine = engine(EngineConfig::default());
    engine.evaluate(Instant::now());
    let sink = engine.applier().sink();
    assert_eq!(sink.len(), 28);
    assert_eq!(sink.opacity(), 1.0);
    assert!(sink.property("--color-primary").is_some());
}

#[test]
fn repeated_passes_hit_the_cache() {
    let mut engine = engine(EngineConfig::default());
    let now = Instant::now();
    let a = engine.evaluate(now);
    let b = engine.evaluate(now + Duration::from_secs(1));
    assert_eq!(engine.cache_len(), 1);
    // Same Arc, not merely an equal value
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn theme_switch_fades_then_lands() {
    let config = EngineConfig {
        adapt_to_time: false,
        ..EngineConfig::default()
    };
    let mut engine = engine(config);
    let start = Instant::now();
    engine.evaluate(start);
    let first_primary = engine
        .applier()
        .sink()
        .property("--color-primary")
        .unwrap()
        .to_string();

    engine.set_theme("aurora");
    engine.evaluate(start + Duration::from_millis(10));
    assert!(engine.applier().is_transitioning());
    // Old properties remain applied during the hold
    assert_eq!(
        engine.applier().sink().property("--color-primary"),
        Some(first_primary.as_str())
    );

    assert!(engine.tick(start + Duration::from_millis(10) + FADE_HOLD));
    let landed = engine.applier().sink().property("--color-primary").unwrap();
    assert_ne!(landed, first_primary);
}

#[test]
fn auto_dark_off_pins_light_scheme() {
    let dark_sensors = SensorSuite::fixed(14, ColorScheme::Dark, None, None);
    let config = EngineConfig {
        auto_dark: false,
        adapt_to_time: false,
        ..EngineConfig::default()
    };
    let mut engine = ThemeEngine::new(
        config,
        dark_sensors,
        DeviceProfile::default(),
        MemorySink::new(),
    );
    let theme = engine.evaluate(Instant::now());

    let mut reference = ThemeEngine::new(
        EngineConfig {
            auto_dark: false,
            adapt_to_time: false,
            ..EngineConfig::default()
        },
        fixed_sensors(),
        DeviceProfile::default(),
        MemorySink::new(),
    );
    let light = reference.evaluate(Instant::now());
    assert_eq!(theme.colors, light.colors);
}

#[test]
fn forced_scheme_beats_the_sensor() {
    let config = EngineConfig {
        adapt_to_time: false,
        ..EngineConfig::default()
    };
    let mut engine = engine(config);
    engine.force_scheme(Some(ColorScheme::Dark));
    let theme = engine.evaluate(Instant::now());
    // Dark backgrounds are darker than light ones
    assert!(theme.colors.background.luminance() < 0.3);
}

#[test]
fn reduced_motion_flows_through_the_engine() {
    let mut engine = engine(EngineConfig::default());
    engine.set_reduced_motion(true);
    let theme = engine.evaluate(Instant::now());
    assert_eq!(theme.animation.duration, Duration::ZERO);
    // Distinct cache entries for the two motion settings
    engine.set_reduced_motion(false);
    let theme = engine.evaluate(Instant::now());
    assert!(theme.animation.duration > Duration::ZERO);
    assert_eq!(engine.cache_len(), 2);
}

#[test]
fn responsive_off_uses_desktop_scale_for_small_viewports() {
    let config = EngineConfig {
        responsive: false,
        ..EngineConfig::default()
    };
    let mut engine = engine(config);
    engine.set_viewport_width(375.0);
    let theme = engine.evaluate(Instant::now());
    assert_eq!(theme.spacing.xl, 32.0);
}

#[test]
fn economy_mode_profile_disables_effects_end_to_end() {
    let weak = DeviceProfile {
        memory_gb: 2.0,
        logical_cores: 2,
        network: lucent_theme::NetworkTier::ThreeG,
        reduced_motion: false,
    };
    let mut engine = ThemeEngine::new(
        EngineConfig {
            performance_mode: PerformanceMode::Auto,
            ..EngineConfig::default()
        },
        fixed_sensors(),
        weak,
        MemorySink::new(),
    );
    engine.evaluate(Instant::now());
    let sink = engine.applier().sink();
    assert_eq!(sink.property("--effect-blur"), Some("0px"));
    assert_eq!(sink.property("--effect-shadow"), Some("none"));
    assert_eq!(sink.property("--animation-duration"), Some("150ms"));
}

#[cfg(feature = "scheduler")]
mod scheduler {
    use super::*;
    use lucent_theme::{spawn, SchedulerEvent};
    use std::sync::{Arc, Mutex};
    use std::thread;

    /// Sink shared between the scheduler thread and the test
    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<MemorySink>>);

    impl StyleSink for SharedSink {
        fn set_property(&mut self, name: &str, value: &str) {
            self.0.lock().unwrap().set_property(name, value);
        }
        fn remove_property(&mut self, name: &str) {
            self.0.lock().unwrap().remove_property(name);
        }
        fn set_root_opacity(&mut self, opacity: f32) {
            self.0.lock().unwrap().set_root_opacity(opacity);
        }
    }

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    #[test]
    fn scheduler_runs_mount_pass_and_reacts_to_events() {
        init_logging();
        let sink = SharedSink::default();
        let engine = ThemeEngine::new(
            EngineConfig {
                adapt_to_time: false,
                ..EngineConfig::default()
            },
            fixed_sensors(),
            DeviceProfile::default(),
            sink.clone(),
        );
        let handle = spawn(engine);

        // Mount pass lands without any event
        thread::sleep(Duration::from_millis(100));
        let first = sink
            .0
            .lock()
            .unwrap()
            .property("--color-primary")
            .map(str::to_string);
        assert!(first.is_some());

        handle.notify(SchedulerEvent::ThemeChanged("aurora".to_string()));
        // Event pass plus its fade hold
        thread::sleep(Duration::from_millis(400));
        let second = sink
            .0
            .lock()
            .unwrap()
            .property("--color-primary")
            .map(str::to_string);
        assert_ne!(first, second);

        handle.shutdown();
    }

    #[test]
    fn shutdown_joins_cleanly() {
        let engine = ThemeEngine::new(
            EngineConfig::default(),
            fixed_sensors(),
            DeviceProfile::default(),
            SharedSink::default(),
        );
        let handle = spawn(engine);
        handle.shutdown();
    }
}
