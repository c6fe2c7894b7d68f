//! Color tokens for theming

use lucent_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    Primary,
    Secondary,
    Accent,
    Background,
    Surface,
    Text,
    Muted,
    Border,
    Error,
    Warning,
    Success,
    Info,
}

impl ColorToken {
    /// All tokens in CSS emission order
    pub fn all() -> &'static [ColorToken] {
        const TOKENS: [ColorToken; 12] = [
            ColorToken::Primary,
            ColorToken::Secondary,
            ColorToken::Accent,
            ColorToken::Background,
            ColorToken::Surface,
            ColorToken::Text,
            ColorToken::Muted,
            ColorToken::Border,
            ColorToken::Error,
            ColorToken::Warning,
            ColorToken::Success,
            ColorToken::Info,
        ];
        &TOKENS
    }

    /// Kebab-case name used in CSS custom properties (`--color-<name>`)
    pub fn css_name(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::Secondary => "secondary",
            ColorToken::Accent => "accent",
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::Text => "text",
            ColorToken::Muted => "muted",
            ColorToken::Border => "border",
            ColorToken::Error => "error",
            ColorToken::Warning => "warning",
            ColorToken::Success => "success",
            ColorToken::Info => "info",
        }
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Secondary => self.secondary,
            ColorToken::Accent => self.accent,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::Text => self.text,
            ColorToken::Muted => self.muted,
            ColorToken::Border => self.border,
            ColorToken::Error => self.error,
            ColorToken::Warning => self.warning,
            ColorToken::Success => self.success,
            ColorToken::Info => self.info,
        }
    }

    /// Iterate `(css_name, color)` pairs in stable order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        ColorToken::all()
            .iter()
            .map(move |&t| (t.css_name(), self.get(t)))
    }

    /// Linear interpolation between two color token sets
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            primary: Color::lerp(&from.primary, &to.primary, t),
            secondary: Color::lerp(&from.secondary, &to.secondary, t),
            accent: Color::lerp(&from.accent, &to.accent, t),
            background: Color::lerp(&from.background, &to.background, t),
            surface: Color::lerp(&from.surface, &to.surface, t),
            text: Color::lerp(&from.text, &to.text, t),
            muted: Color::lerp(&from.muted, &to.muted, t),
            border: Color::lerp(&from.border, &to.border, t),
            error: Color::lerp(&from.error, &to.error, t),
            warning: Color::lerp(&from.warning, &to.warning, t),
            success: Color::lerp(&from.success, &to.success, t),
            info: Color::lerp(&from.info, &to.info, t),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        // Basic light palette; real values come from the preset catalog
        Self {
            primary: Color::from_hex(0x6366F1),
            secondary: Color::from_hex(0x8B5CF6),
            accent: Color::from_hex(0x22D3EE),
            background: Color::from_hex(0xF8FAFC),
            surface: Color::WHITE,
            text: Color::from_hex(0x0F172A),
            muted: Color::from_hex(0x64748B),
            border: Color::from_hex(0xE2E8F0),
            error: Color::from_hex(0xDC2626),
            warning: Color::from_hex(0xD97706),
            success: Color::from_hex(0x16A34A),
            info: Color::from_hex(0x0EA5E9),
        }
    }
}
