//! Spacing tokens for theming

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl SpacingToken {
    /// All tokens in CSS emission order
    pub fn all() -> &'static [SpacingToken] {
        const TOKENS: [SpacingToken; 5] = [
            SpacingToken::Xs,
            SpacingToken::Sm,
            SpacingToken::Md,
            SpacingToken::Lg,
            SpacingToken::Xl,
        ];
        &TOKENS
    }

    /// Name used in CSS custom properties (`--spacing-<name>`)
    pub fn css_name(self) -> &'static str {
        match self {
            SpacingToken::Xs => "xs",
            SpacingToken::Sm => "sm",
            SpacingToken::Md => "md",
            SpacingToken::Lg => "lg",
            SpacingToken::Xl => "xl",
        }
    }
}

/// Spacing scale in logical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

impl SpacingTokens {
    /// Get a spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
        }
    }

    /// Tighter scale used below the tablet breakpoint
    pub const fn mobile() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
        }
    }

    /// Default scale for tablet and desktop widths
    pub const fn desktop() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 16.0,
            lg: 24.0,
            xl: 32.0,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self::desktop()
    }
}
