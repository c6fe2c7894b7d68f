//! Environmental context sensing
//!
//! A [`ThemeContext`] is an immutable snapshot of the signals driving theme
//! adaptation: wall-clock time bucket, system color scheme, ambient light,
//! and battery state. Snapshots are rebuilt on every scheduler pass and
//! superseded, never mutated.
//!
//! Each signal source is modeled as a [`Capability`]: either a reader
//! selected once at startup, or a fixed default when the platform cannot
//! provide the signal. A reader returning `None` degrades to the default
//! too, so context sensing is total - it never errors.

use crate::config::EngineConfig;

/// Wall-clock bucket driving time-of-day adaptation
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TimeOfDay {
    Morning,
    Day,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bucket for an hour in `0..24`: [5,12) morning, [12,17) day,
    /// [17,21) evening, otherwise night.
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Day,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    /// Stable name used in cache keys
    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Day => "day",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

/// Light or dark polarity
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Stable name used in cache keys
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// Ambient light bucket from a lux reading
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AmbientLight {
    Bright,
    Dim,
    Dark,
}

impl AmbientLight {
    /// Bucket for a lux value: >40 bright, >10 dim, otherwise dark
    pub fn from_lux(lux: f32) -> Self {
        if lux > 40.0 {
            AmbientLight::Bright
        } else if lux > 10.0 {
            AmbientLight::Dim
        } else {
            AmbientLight::Dark
        }
    }

    /// Stable name used in cache keys
    pub fn as_str(self) -> &'static str {
        match self {
            AmbientLight::Bright => "bright",
            AmbientLight::Dim => "dim",
            AmbientLight::Dark => "dark",
        }
    }
}

/// Battery state as reported by the platform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatteryStatus {
    /// Charge percentage in `0..=100`
    pub level: u8,
    pub charging: bool,
}

impl BatteryStatus {
    /// Default when the platform has no battery capability
    pub const UNKNOWN: Self = Self {
        level: 100,
        charging: true,
    };
}

/// Snapshot of environmental signals at one evaluation instant.
///
/// Immutable once constructed; the next scheduler pass builds a fresh one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeContext {
    pub time_of_day: TimeOfDay,
    pub system_scheme: ColorScheme,
    pub ambient_light: Option<AmbientLight>,
    pub battery_level: Option<u8>,
    pub is_charging: Option<bool>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self {
            time_of_day: TimeOfDay::Day,
            system_scheme: ColorScheme::Light,
            ambient_light: None,
            battery_level: None,
            is_charging: None,
        }
    }
}

/// A platform signal source selected once at startup.
///
/// `Available` holds a reader; `Unavailable` holds the documented default.
/// Readers return `Option` so a transient platform failure also falls back
/// to the default rather than surfacing an error.
pub enum Capability<T> {
    Available(Box<dyn Fn() -> Option<T> + Send>),
    Unavailable(T),
}

impl<T: Copy + std::fmt::Debug> Capability<T> {
    /// Capability backed by a reader function
    pub fn available(reader: impl Fn() -> Option<T> + Send + 'static) -> Self {
        Capability::Available(Box::new(reader))
    }

    /// Capability fixed to a default value
    pub fn unavailable(default: T) -> Self {
        Capability::Unavailable(default)
    }

    /// Read the signal, substituting `default` on any degraded read
    pub fn read(&self, default: T) -> T {
        match self {
            Capability::Available(reader) => reader().unwrap_or_else(|| {
                tracing::debug!(?default, "capability read degraded to default");
                default
            }),
            Capability::Unavailable(value) => *value,
        }
    }
}

/// The full set of capabilities the sensor reads each pass
pub struct SensorSuite {
    /// Hour of day in `0..24`
    pub clock: Capability<u8>,
    pub system_scheme: Capability<ColorScheme>,
    /// Ambient light level in lux
    pub ambient_lux: Capability<f32>,
    pub battery: Capability<BatteryStatus>,
}

impl SensorSuite {
    /// Suite wired to the host platform.
    ///
    /// The clock is always available; scheme, light, and battery default to
    /// light / bright / full-and-charging until the embedding host installs
    /// real readers.
    pub fn host() -> Self {
        Self {
            clock: Capability::available(|| {
                use std::time::{SystemTime, UNIX_EPOCH};
                let secs = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .ok()?
                    .as_secs();
                Some(((secs / 3600) % 24) as u8)
            }),
            system_scheme: Capability::unavailable(ColorScheme::Light),
            ambient_lux: Capability::unavailable(f32::MAX),
            battery: Capability::unavailable(BatteryStatus::UNKNOWN),
        }
    }

    /// Fully deterministic suite for tests and headless hosts
    pub fn fixed(
        hour: u8,
        scheme: ColorScheme,
        lux: Option<f32>,
        battery: Option<BatteryStatus>,
    ) -> Self {
        Self {
            clock: Capability::unavailable(hour),
            system_scheme: Capability::unavailable(scheme),
            ambient_lux: match lux {
                Some(v) => Capability::unavailable(v),
                None => Capability::unavailable(f32::MAX),
            },
            battery: Capability::unavailable(battery.unwrap_or(BatteryStatus::UNKNOWN)),
        }
    }

    /// Build a context snapshot honoring the config's adaptation flags.
    ///
    /// Disabled flags pin the corresponding field to its default instead of
    /// reading the capability, so a disabled signal can never perturb the
    /// cache key.
    pub fn read_context(&self, config: &EngineConfig) -> ThemeContext {
        let time_of_day = if config.adapt_to_time {
            TimeOfDay::from_hour(self.clock.read(12))
        } else {
            TimeOfDay::Day
        };

        let system_scheme = if config.adapt_to_system_theme {
            self.system_scheme.read(ColorScheme::Light)
        } else {
            ColorScheme::Light
        };

        let ambient_light = if config.adapt_to_ambient_light {
            // Bright is the stated default for an unsupported sensor
            Some(AmbientLight::from_lux(self.ambient_lux.read(f32::MAX)))
        } else {
            None
        };

        let battery = self.battery.read(BatteryStatus::UNKNOWN);

        ThemeContext {
            time_of_day,
            system_scheme,
            ambient_light,
            battery_level: Some(battery.level.min(100)),
            is_charging: Some(battery.charging),
        }
    }
}
