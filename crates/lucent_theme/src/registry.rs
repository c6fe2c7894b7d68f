//! Base theme registry
//!
//! A fixed, insertion-ordered mapping from theme name to its light/dark
//! base palettes. Built once from the preset catalog and read-only for the
//! process lifetime. Unknown names fall back to the default theme instead
//! of erroring.

use crate::context::ColorScheme;
use crate::presets::ThemePreset;
use crate::tokens::ColorTokens;
use indexmap::IndexMap;

/// Name of the theme unknown lookups fall back to
pub const DEFAULT_THEME: &str = "velora";

/// Static light/dark palette pair for a named theme
#[derive(Clone, Debug)]
pub struct BaseTheme {
    pub name: &'static str,
    pub light: ColorTokens,
    pub dark: ColorTokens,
}

impl BaseTheme {
    /// Palette for the given scheme polarity
    pub fn for_scheme(&self, scheme: ColorScheme) -> &ColorTokens {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

/// Fixed catalog of base themes, keyed by name in insertion order
pub struct ThemeRegistry {
    themes: IndexMap<&'static str, BaseTheme>,
}

impl ThemeRegistry {
    /// Build the registry from the full preset catalog
    pub fn builtin() -> Self {
        let mut themes = IndexMap::with_capacity(ThemePreset::all().len());
        for preset in ThemePreset::all() {
            themes.insert(preset.id(), preset.base_theme());
        }
        debug_assert!(themes.contains_key(DEFAULT_THEME));
        Self { themes }
    }

    /// Look up a theme by name, falling back to [`DEFAULT_THEME`].
    ///
    /// Unknown names are a supported input (hosts pass arbitrary strings),
    /// so the miss is logged at debug level, not treated as an error.
    pub fn get(&self, name: &str) -> &BaseTheme {
        self.themes.get(name).unwrap_or_else(|| {
            tracing::debug!(theme = name, "unknown theme name, using default");
            &self.themes[DEFAULT_THEME]
        })
    }

    /// Theme names in stable insertion order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.themes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
