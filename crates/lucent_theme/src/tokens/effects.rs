//! Visual effect tokens for theming

use lucent_core::{Color, Shadow};

/// Effect values for a resolved theme.
///
/// Economy mode zeroes blur and shadow entirely; high mode enables the
/// full set. Brightness and contrast are CSS filter multipliers.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectTokens {
    pub blur_px: f32,
    pub shadow: Shadow,
    pub brightness: f32,
    pub contrast: f32,
}

impl EffectTokens {
    /// No blur, no shadow, neutral filters
    pub fn flat() -> Self {
        Self {
            blur_px: 0.0,
            shadow: Shadow::none(),
            brightness: 1.0,
            contrast: 1.0,
        }
    }

    /// Moderate blur and shadow for balanced mode
    pub fn balanced() -> Self {
        Self {
            blur_px: 8.0,
            shadow: Shadow::new(0.0, 2.0, 8.0, 0.0, Color::BLACK.with_alpha(0.2)),
            brightness: 1.0,
            contrast: 1.0,
        }
    }

    /// Full blur and shadow for high mode
    pub fn rich() -> Self {
        Self {
            blur_px: 16.0,
            shadow: Shadow::new(0.0, 4.0, 16.0, 0.0, Color::BLACK.with_alpha(0.25)),
            brightness: 1.0,
            contrast: 1.05,
        }
    }

    /// CSS `blur(..)` pixel string, e.g. `8px`
    pub fn blur_css(&self) -> String {
        format!("{}px", self.blur_px)
    }
}

impl Default for EffectTokens {
    fn default() -> Self {
        Self::balanced()
    }
}
