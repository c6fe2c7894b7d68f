//! Breakpoint-driven device classification

/// Breakpoint widths in logical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
    /// Small breakpoint (`sm`) - 640px
    pub sm: f32,
    /// Medium breakpoint (`md`) - 768px
    pub md: f32,
    /// Large breakpoint (`lg`) - 1024px
    pub lg: f32,
    /// Extra large breakpoint (`xl`) - 1280px
    pub xl: f32,
}

impl Breakpoints {
    pub const DEFAULT: Self = Self {
        sm: 640.0,
        md: 768.0,
        lg: 1024.0,
        xl: 1280.0,
    };
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Device-class abstraction derived from breakpoints
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum DeviceClass {
    /// Width < `md` (768px)
    Mobile,
    /// `md` <= width < `lg` (1024px)
    Tablet,
    /// Width >= `lg` (1024px)
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width using the default breakpoints
    pub fn for_width(width: f32) -> Self {
        let bp = Breakpoints::DEFAULT;
        match width {
            w if w < bp.md => DeviceClass::Mobile,
            w if w < bp.lg => DeviceClass::Tablet,
            _ => DeviceClass::Desktop,
        }
    }

    /// Stable name used in cache keys
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }
}

/// Responsive inputs to theme resolution
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveState {
    pub device_class: DeviceClass,
    pub viewport_width: f32,
}

impl ResponsiveState {
    pub fn for_width(width: f32) -> Self {
        Self {
            device_class: DeviceClass::for_width(width),
            viewport_width: width,
        }
    }
}

impl Default for ResponsiveState {
    fn default() -> Self {
        Self::for_width(1280.0)
    }
}
