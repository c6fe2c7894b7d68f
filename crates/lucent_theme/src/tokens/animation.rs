//! Animation tokens for theming

use std::time::Duration;

/// Easing curve applied to theme-driven motion
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// CSS cubic-bezier control points
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Overshooting spring-like curve used in high performance mode
    pub const fn spring() -> Self {
        Easing::CubicBezier(0.34, 1.56, 0.64, 1.0)
    }

    /// CSS `transition-timing-function` value
    pub fn to_css(self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseInOut
    }
}

/// Motion values for a resolved theme
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationTokens {
    pub duration: Duration,
    pub easing: Easing,
    pub reduced_motion: bool,
}

impl AnimationTokens {
    /// CSS duration string in milliseconds, e.g. `300ms`
    pub fn duration_css(&self) -> String {
        format!("{}ms", self.duration.as_millis())
    }
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            reduced_motion: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_css_values() {
        assert_eq!(Easing::Linear.to_css(), "linear");
        assert_eq!(Easing::EaseInOut.to_css(), "ease-in-out");
        assert_eq!(
            Easing::spring().to_css(),
            "cubic-bezier(0.34, 1.56, 0.64, 1)"
        );
    }

    #[test]
    fn test_duration_css() {
        let tokens = AnimationTokens::default();
        assert_eq!(tokens.duration_css(), "300ms");
    }
}
