//! Theme resolution
//!
//! `resolve` is a pure function from (context snapshot, theme name,
//! responsive state, performance mode) to a [`ResolvedTheme`]. It is total:
//! unknown theme names, disabled adaptations, and missing optional context
//! fields all degrade to defaults. Given identical inputs it returns
//! identical output - the cache depends on that.
//!
//! Adaptation order is fixed: base lookup, time-of-day substitution,
//! ambient-light adjustment, then the battery-saving override, which always
//! wins over the previous two for the background and surface fields (and
//! only those two - primary/accent deliberately keep their time tint).

use crate::context::{AmbientLight, ColorScheme, ThemeContext, TimeOfDay};
use crate::perf::PerformanceMode;
use crate::registry::ThemeRegistry;
use crate::responsive::{DeviceClass, ResponsiveState};
use crate::tokens::{
    AnimationTokens, ColorTokens, Easing, EffectTokens, SpacingTokens, TypographyTokens,
};
use lucent_core::Color;
use std::time::Duration;

/// Battery percentage below which the saving override engages
pub const BATTERY_SAVER_THRESHOLD: u8 = 20;

/// Fully adapted theme ready to be applied to a document
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTheme {
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub animation: AnimationTokens,
    pub effects: EffectTokens,
}

/// Everything `resolve` is allowed to look at
#[derive(Clone, Copy, Debug)]
pub struct ResolveInputs<'a> {
    pub context: &'a ThemeContext,
    pub theme_name: &'a str,
    pub responsive: ResponsiveState,
    /// Concrete mode; `Auto` must be resolved against a device profile first
    pub performance_mode: PerformanceMode,
    pub reduced_motion: bool,
    pub adapt_to_time: bool,
}

/// Per-bucket substitution palette for time-of-day adaptation
mod time_palette {
    use lucent_core::Color;

    pub const MORNING_PRIMARY: Color = Color::from_hex(0x34D399);
    pub const MORNING_ACCENT: Color = Color::from_hex(0x6EE7B7);
    pub const DAY_PRIMARY: Color = Color::from_hex(0x3B82F6);
    pub const DAY_ACCENT: Color = Color::from_hex(0x60A5FA);
    pub const EVENING_PRIMARY: Color = Color::from_hex(0xF59E0B);
    pub const EVENING_ACCENT: Color = Color::from_hex(0xFBBF24);
    pub const NIGHT_PRIMARY: Color = Color::from_hex(0x8B5CF6);
    pub const NIGHT_ACCENT: Color = Color::from_hex(0xA78BFA);
    /// Deep violet the night bucket shifts backgrounds toward
    pub const NIGHT_BACKGROUND_TINT: Color = Color::from_hex(0x2E1065);
}

/// Flat colors forced under low, non-charging battery
mod battery_palette {
    use lucent_core::Color;

    pub const LIGHT_BACKGROUND: Color = Color::from_hex(0xF5F5F5);
    pub const LIGHT_SURFACE: Color = Color::from_hex(0xFFFFFF);
    pub const DARK_BACKGROUND: Color = Color::from_hex(0x000000);
    pub const DARK_SURFACE: Color = Color::from_hex(0x121212);
}

/// Resolve a theme for the given inputs. Pure and deterministic.
pub fn resolve(registry: &ThemeRegistry, inputs: &ResolveInputs<'_>) -> ResolvedTheme {
    let ctx = inputs.context;
    let base = registry.get(inputs.theme_name);
    let mut colors = base.for_scheme(ctx.system_scheme).clone();

    if inputs.adapt_to_time {
        apply_time_adaptation(&mut colors, ctx.time_of_day);
    }
    if let Some(ambient) = ctx.ambient_light {
        apply_ambient_adaptation(&mut colors, ambient, ctx.system_scheme);
    }
    // The saver override runs last so it beats time/ambient shifts on the
    // two fields it owns.
    if battery_saver_active(ctx) {
        apply_battery_saver(&mut colors, ctx.system_scheme);
    }

    let (typography, spacing) = match inputs.responsive.device_class {
        DeviceClass::Mobile => (TypographyTokens::mobile(), SpacingTokens::mobile()),
        DeviceClass::Tablet | DeviceClass::Desktop => {
            (TypographyTokens::desktop(), SpacingTokens::desktop())
        }
    };

    let (animation, effects) = motion_for_mode(inputs.performance_mode, inputs.reduced_motion);

    ResolvedTheme {
        colors,
        typography,
        spacing,
        animation,
        effects,
    }
}

/// Whether the battery-saving override applies to this context
pub fn battery_saver_active(ctx: &ThemeContext) -> bool {
    matches!(ctx.battery_level, Some(level) if level < BATTERY_SAVER_THRESHOLD)
        && ctx.is_charging == Some(false)
}

fn apply_time_adaptation(colors: &mut ColorTokens, time: TimeOfDay) {
    use time_palette::*;
    match time {
        TimeOfDay::Morning => {
            colors.primary = MORNING_PRIMARY;
            colors.accent = MORNING_ACCENT;
        }
        TimeOfDay::Day => {
            colors.primary = DAY_PRIMARY;
            colors.accent = DAY_ACCENT;
        }
        TimeOfDay::Evening => {
            colors.primary = EVENING_PRIMARY;
            colors.accent = EVENING_ACCENT;
        }
        TimeOfDay::Night => {
            colors.primary = NIGHT_PRIMARY;
            colors.accent = NIGHT_ACCENT;
            colors.background = Color::lerp(&colors.background, &NIGHT_BACKGROUND_TINT, 0.12);
        }
    }
}

fn apply_ambient_adaptation(colors: &mut ColorTokens, ambient: AmbientLight, scheme: ColorScheme) {
    // Harder contrast target per polarity
    let target = match scheme {
        ColorScheme::Light => Color::BLACK,
        ColorScheme::Dark => Color::WHITE,
    };
    match ambient {
        // Glare calls for more text emphasis
        AmbientLight::Bright => {
            colors.text = Color::lerp(&colors.text, &target, 0.20);
        }
        AmbientLight::Dim => {
            colors.text = Color::lerp(&colors.text, &target, 0.10);
        }
        // A dark room calls for softer text and a deeper background
        AmbientLight::Dark => {
            colors.text = Color::lerp(&colors.text, &colors.muted, 0.15);
            colors.background = colors.background.darken(0.15);
        }
    }
}

fn apply_battery_saver(colors: &mut ColorTokens, scheme: ColorScheme) {
    use battery_palette::*;
    match scheme {
        ColorScheme::Light => {
            colors.background = LIGHT_BACKGROUND;
            colors.surface = LIGHT_SURFACE;
        }
        ColorScheme::Dark => {
            colors.background = DARK_BACKGROUND;
            colors.surface = DARK_SURFACE;
        }
    }
}

fn motion_for_mode(mode: PerformanceMode, reduced_motion: bool) -> (AnimationTokens, EffectTokens) {
    let (duration, easing, effects) = match mode {
        PerformanceMode::Economy => (
            Duration::from_millis(150),
            Easing::EaseOut,
            EffectTokens::flat(),
        ),
        PerformanceMode::Balanced => (
            Duration::from_millis(300),
            Easing::EaseInOut,
            EffectTokens::balanced(),
        ),
        PerformanceMode::High => (
            Duration::from_millis(400),
            Easing::spring(),
            EffectTokens::rich(),
        ),
        // Callers resolve Auto before reaching here; treat a leak as balanced
        PerformanceMode::Auto => (
            Duration::from_millis(300),
            Easing::EaseInOut,
            EffectTokens::balanced(),
        ),
    };
    let animation = AnimationTokens {
        duration: if reduced_motion {
            Duration::ZERO
        } else {
            duration
        },
        easing,
        reduced_motion,
    };
    (animation, effects)
}
