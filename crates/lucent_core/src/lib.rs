//! Lucent Core
//!
//! Shared primitives for the Lucent UI toolkit:
//!
//! - [`Color`]: linear RGBA color with hex construction, blending, and CSS
//!   serialization
//! - [`Shadow`]: box-shadow definition with interpolation
//! - [`LucentError`]: the workspace error type for the few fallible
//!   boundaries (configuration parsing, preference storage)
//!
//! The theming pipeline itself is total - environmental reads degrade to
//! documented defaults instead of erroring - so `Result` only shows up at
//! the config and preference-store surfaces.

pub mod color;
pub mod error;
pub mod shadow;

pub use color::Color;
pub use error::LucentError;
pub use shadow::Shadow;
