//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a resolved theme:
//! - Colors
//! - Typography (fluid size, weights, spacing)
//! - Spacing scale
//! - Animation durations and easings
//! - Visual effects (blur, shadow, brightness, contrast)

mod animation;
mod color;
mod effects;
mod spacing;
mod typography;

pub use animation::*;
pub use color::*;
pub use effects::*;
pub use spacing::*;
pub use typography::*;
