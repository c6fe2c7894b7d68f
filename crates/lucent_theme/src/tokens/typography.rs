//! Typography tokens for theming

/// Typography values for a resolved theme.
///
/// `font_size` is a fluid CSS expression (a `clamp(...)`) rather than a
/// fixed pixel value, so consumers inherit viewport scaling for free.
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub font_size: String,
    pub line_height: f32,
    pub font_weight: u16,
    pub letter_spacing: String,
}

impl TypographyTokens {
    /// Compact scale used below the tablet breakpoint
    pub fn mobile() -> Self {
        Self {
            font_size: "clamp(0.875rem, 2.5vw, 1rem)".to_string(),
            line_height: 1.5,
            font_weight: 400,
            letter_spacing: "0.01em".to_string(),
        }
    }

    /// Default scale for tablet and desktop widths
    pub fn desktop() -> Self {
        Self {
            font_size: "clamp(1rem, 1.2vw, 1.125rem)".to_string(),
            line_height: 1.6,
            font_weight: 400,
            letter_spacing: "normal".to_string(),
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self::desktop()
    }
}
