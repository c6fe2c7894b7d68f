//! Color type with blending and CSS serialization

/// A linear RGBA color with components in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create an opaque color from float components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from float components with alpha
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a 24-bit hex value like `0x1E66F5`
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Return this color with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Mix toward white by `amount` (0.0 = unchanged, 1.0 = white)
    pub fn lighten(self, amount: f32) -> Self {
        Color::lerp(&self, &Color::WHITE.with_alpha(self.a), amount)
    }

    /// Mix toward black by `amount` (0.0 = unchanged, 1.0 = black)
    pub fn darken(self, amount: f32) -> Self {
        Color::lerp(&self, &Color::BLACK.with_alpha(self.a), amount)
    }

    /// Relative luminance (ITU-R BT.709 weights, no gamma correction)
    pub fn luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// CSS color string: `#rrggbb` for opaque colors, `rgba(...)` otherwise
    pub fn to_css(self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        if self.a < 1.0 {
            format!("rgba({r},{g},{b},{})", self.a)
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn test_from_hex_components() {
        let c = Color::from_hex(0x1E66F5);
        assert!((c.r - 30.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 102.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 245.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_css_roundtrip_opaque_and_alpha() {
        assert_eq!(Color::from_hex(0x1E66F5).to_css(), "#1e66f5");
        assert_eq!(
            Color::from_hex(0xFF0000).with_alpha(0.5).to_css(),
            "rgba(255,0,0,0.5)"
        );
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::from_hex(0x000000);
        let b = Color::from_hex(0xFFFFFF);
        assert_eq!(Color::lerp(&a, &b, 0.0), a);
        assert_eq!(Color::lerp(&a, &b, 1.0), b);
    }

    #[test]
    fn test_lerp_clamps_t() {
        let a = Color::from_hex(0x336699);
        let b = Color::from_hex(0x996633);
        assert_eq!(Color::lerp(&a, &b, 1.5), b);
        assert_eq!(Color::lerp(&a, &b, -0.5), a);
    }
}
