//! Box shadow definition

use crate::color::Color;

/// A box shadow: offset, blur, spread, and color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    /// Whether this shadow draws nothing
    pub fn is_none(&self) -> bool {
        self.color.a == 0.0 || (self.blur == 0.0 && self.offset_x == 0.0 && self.offset_y == 0.0)
    }

    /// Linear interpolation between two shadows
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            offset_x: from.offset_x + (to.offset_x - from.offset_x) * t,
            offset_y: from.offset_y + (to.offset_y - from.offset_y) * t,
            blur: from.blur + (to.blur - from.blur) * t,
            spread: from.spread + (to.spread - from.spread) * t,
            color: Color::lerp(&from.color, &to.color, t),
        }
    }

    /// CSS `box-shadow` value, or `none` for an empty shadow
    pub fn to_css(&self) -> String {
        if self.is_none() {
            "none".to_string()
        } else {
            format!(
                "{}px {}px {}px {}px {}",
                self.offset_x,
                self.offset_y,
                self.blur,
                self.spread,
                self.color.to_css()
            )
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}
