//! Built-in theme preset catalog
//!
//! Each preset is a compact seed palette (primary, secondary, accent, and a
//! neutral tint) expanded into full light and dark token sets by one shared
//! builder, so the 25 themes stay consistent in contrast and surface
//! relationships while differing in character.

use crate::context::ColorScheme;
use crate::registry::BaseTheme;
use crate::tokens::ColorTokens;
use lucent_core::Color;
use std::fmt::{Display, Formatter};

/// Built-in theme catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    Velora,
    Aurora,
    Lumen,
    Crystal,
    Prism,
    Nebula,
    Obsidian,
    Quartz,
    Aether,
    Solstice,
    Zephyr,
    Ember,
    Glacier,
    Meadow,
    Dune,
    Orchid,
    Midnight,
    Coral,
    Sage,
    Storm,
    Halo,
    Onyx,
    Lagoon,
    Blossom,
    Cinder,
}

/// Seed colors a preset contributes; everything else is derived
#[derive(Clone, Copy, Debug)]
struct Seed {
    primary: Color,
    secondary: Color,
    accent: Color,
    /// Neutral tint mixed into backgrounds, surfaces, and text
    tint: Color,
}

impl ThemePreset {
    /// Stable preset id used as the registry key
    pub fn id(self) -> &'static str {
        match self {
            Self::Velora => "velora",
            Self::Aurora => "aurora",
            Self::Lumen => "lumen",
            Self::Crystal => "crystal",
            Self::Prism => "prism",
            Self::Nebula => "nebula",
            Self::Obsidian => "obsidian",
            Self::Quartz => "quartz",
            Self::Aether => "aether",
            Self::Solstice => "solstice",
            Self::Zephyr => "zephyr",
            Self::Ember => "ember",
            Self::Glacier => "glacier",
            Self::Meadow => "meadow",
            Self::Dune => "dune",
            Self::Orchid => "orchid",
            Self::Midnight => "midnight",
            Self::Coral => "coral",
            Self::Sage => "sage",
            Self::Storm => "storm",
            Self::Halo => "halo",
            Self::Onyx => "onyx",
            Self::Lagoon => "lagoon",
            Self::Blossom => "blossom",
            Self::Cinder => "cinder",
        }
    }

    /// User-facing display name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Velora => "Velora",
            Self::Aurora => "Aurora",
            Self::Lumen => "Lumen",
            Self::Crystal => "Crystal",
            Self::Prism => "Prism",
            Self::Nebula => "Nebula",
            Self::Obsidian => "Obsidian",
            Self::Quartz => "Quartz",
            Self::Aether => "Aether",
            Self::Solstice => "Solstice",
            Self::Zephyr => "Zephyr",
            Self::Ember => "Ember",
            Self::Glacier => "Glacier",
            Self::Meadow => "Meadow",
            Self::Dune => "Dune",
            Self::Orchid => "Orchid",
            Self::Midnight => "Midnight",
            Self::Coral => "Coral",
            Self::Sage => "Sage",
            Self::Storm => "Storm",
            Self::Halo => "Halo",
            Self::Onyx => "Onyx",
            Self::Lagoon => "Lagoon",
            Self::Blossom => "Blossom",
            Self::Cinder => "Cinder",
        }
    }

    /// Full preset list, in catalog order (velora first; it is the default)
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 25] = [
            ThemePreset::Velora,
            ThemePreset::Aurora,
            ThemePreset::Lumen,
            ThemePreset::Crystal,
            ThemePreset::Prism,
            ThemePreset::Nebula,
            ThemePreset::Obsidian,
            ThemePreset::Quartz,
            ThemePreset::Aether,
            ThemePreset::Solstice,
            ThemePreset::Zephyr,
            ThemePreset::Ember,
            ThemePreset::Glacier,
            ThemePreset::Meadow,
            ThemePreset::Dune,
            ThemePreset::Orchid,
            ThemePreset::Midnight,
            ThemePreset::Coral,
            ThemePreset::Sage,
            ThemePreset::Storm,
            ThemePreset::Halo,
            ThemePreset::Onyx,
            ThemePreset::Lagoon,
            ThemePreset::Blossom,
            ThemePreset::Cinder,
        ];
        &PRESETS
    }

    /// Build the light/dark base theme for this preset
    pub fn base_theme(self) -> BaseTheme {
        let seed = self.seed();
        BaseTheme {
            name: self.id(),
            light: build_colors(seed, ColorScheme::Light),
            dark: build_colors(seed, ColorScheme::Dark),
        }
    }

    fn seed(self) -> Seed {
        match self {
            Self::Velora => seed(0x7C3AED, 0x9333EA, 0x22D3EE, 0x7C3AED),
            Self::Aurora => seed(0x10B981, 0x14B8A6, 0xF472B6, 0x10B981),
            Self::Lumen => seed(0xF59E0B, 0xF97316, 0x3B82F6, 0xF59E0B),
            Self::Crystal => seed(0x0EA5E9, 0x06B6D4, 0xA78BFA, 0x0EA5E9),
            Self::Prism => seed(0xEC4899, 0xD946EF, 0x34D399, 0xEC4899),
            Self::Nebula => seed(0x6366F1, 0x8B5CF6, 0xF59E0B, 0x6366F1),
            Self::Obsidian => seed(0x334155, 0x475569, 0x38BDF8, 0x334155),
            Self::Quartz => seed(0xF43F5E, 0xFB7185, 0x2DD4BF, 0xF43F5E),
            Self::Aether => seed(0x818CF8, 0xA5B4FC, 0xFB923C, 0x818CF8),
            Self::Solstice => seed(0xEA580C, 0xF59E0B, 0x7C3AED, 0xEA580C),
            Self::Zephyr => seed(0x38BDF8, 0x7DD3FC, 0xF472B6, 0x38BDF8),
            Self::Ember => seed(0xDC2626, 0xEA580C, 0xFBBF24, 0xDC2626),
            Self::Glacier => seed(0x0891B2, 0x22D3EE, 0x818CF8, 0x0891B2),
            Self::Meadow => seed(0x16A34A, 0x22C55E, 0xEAB308, 0x16A34A),
            Self::Dune => seed(0xCA8A04, 0xD6A910, 0x0D9488, 0xCA8A04),
            Self::Orchid => seed(0xC026D3, 0xE879F9, 0x60A5FA, 0xC026D3),
            Self::Midnight => seed(0x1E3A8A, 0x3730A3, 0x22D3EE, 0x1E3A8A),
            Self::Coral => seed(0xFB7185, 0xFDA4AF, 0x14B8A6, 0xFB7185),
            Self::Sage => seed(0x4D7C0F, 0x65A30D, 0xA855F7, 0x4D7C0F),
            Self::Storm => seed(0x475569, 0x64748B, 0xFACC15, 0x475569),
            Self::Halo => seed(0xEAB308, 0xFDE047, 0x6366F1, 0xEAB308),
            Self::Onyx => seed(0x18181B, 0x3F3F46, 0xE11D48, 0x18181B),
            Self::Lagoon => seed(0x0D9488, 0x2DD4BF, 0xF97316, 0x0D9488),
            Self::Blossom => seed(0xDB2777, 0xF472B6, 0x8B5CF6, 0xDB2777),
            Self::Cinder => seed(0x57534E, 0x78716C, 0xEA580C, 0x57534E),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

const fn seed(primary: u32, secondary: u32, accent: u32, tint: u32) -> Seed {
    Seed {
        primary: Color::from_hex(primary),
        secondary: Color::from_hex(secondary),
        accent: Color::from_hex(accent),
        tint: Color::from_hex(tint),
    }
}

/// Expand a seed palette into a full token set for one scheme polarity
fn build_colors(seed: Seed, scheme: ColorScheme) -> ColorTokens {
    match scheme {
        ColorScheme::Light => {
            let background = blend(Color::WHITE, seed.tint, 0.05);
            let surface = blend(Color::WHITE, seed.tint, 0.02);
            ColorTokens {
                primary: seed.primary,
                secondary: seed.secondary,
                accent: seed.accent,
                background,
                surface,
                text: blend(Color::from_hex(0x1E293B), seed.tint, 0.10),
                muted: blend(Color::from_hex(0x64748B), seed.tint, 0.10),
                border: background.darken(0.10),
                error: Color::from_hex(0xDC2626),
                warning: Color::from_hex(0xD97706),
                success: Color::from_hex(0x16A34A),
                info: Color::from_hex(0x0EA5E9),
            }
        }
        ColorScheme::Dark => {
            let background = blend(Color::from_hex(0x0F1117), seed.tint, 0.12);
            let surface = background.lighten(0.06);
            ColorTokens {
                // Seeds are tuned for light surfaces; lift them for contrast
                primary: seed.primary.lighten(0.15),
                secondary: seed.secondary.lighten(0.15),
                accent: seed.accent.lighten(0.10),
                background,
                surface,
                text: blend(Color::from_hex(0xE5E7EB), seed.tint, 0.06),
                muted: blend(Color::from_hex(0x94A3B8), seed.tint, 0.08),
                border: surface.lighten(0.10),
                error: Color::from_hex(0xF87171),
                warning: Color::from_hex(0xFBBF24),
                success: Color::from_hex(0x4ADE80),
                info: Color::from_hex(0x38BDF8),
            }
        }
    }
}

fn blend(a: Color, b: Color, t: f32) -> Color {
    Color::lerp(&a, &b, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_unique_ids() {
        let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn test_light_and_dark_differ() {
        for preset in ThemePreset::all() {
            let theme = preset.base_theme();
            assert_ne!(
                theme.light.background, theme.dark.background,
                "preset {preset:?} should have distinct light/dark backgrounds"
            );
            // Light backgrounds read lighter than dark ones
            assert!(
                theme.light.background.luminance() > theme.dark.background.luminance(),
                "preset {preset:?} polarity inverted"
            );
        }
    }

    #[test]
    fn test_dark_text_is_readable_on_dark_background() {
        for preset in ThemePreset::all() {
            let theme = preset.base_theme();
            let contrast =
                theme.dark.text.luminance() - theme.dark.background.luminance();
            assert!(
                contrast > 0.4,
                "preset {preset:?} dark text contrast too low: {contrast}"
            );
        }
    }
}
