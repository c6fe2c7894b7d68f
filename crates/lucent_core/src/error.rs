//! Workspace error type

use thiserror::Error;

/// Errors surfaced by the fallible edges of the toolkit.
///
/// The theming pipeline itself never produces these - every environmental
/// read has a documented default - so they only appear when loading
/// configuration or persisting preferences.
#[derive(Debug, Error)]
pub enum LucentError {
    /// Configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Preference blob could not be encoded or decoded
    #[error("preference serialization failed: {0}")]
    Prefs(String),

    /// Preference store I/O failed
    #[error("preference store error: {0}")]
    Io(#[from] std::io::Error),
}
