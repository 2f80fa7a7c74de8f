//! error handling stuff
use thiserror::Error;

#[derive(Debug, Error)]
/// An error
pub enum ThemeError {
    /// a color string that isn't valid `oklch(...)`
    #[error("invalid color '{input}': {reason}")]
    ParseColor {
        /// the offending input
        input: String,
        /// what went wrong
        reason: &'static str,
    },

    /// a length token that isn't a valid `rem`/`px` value
    #[error("invalid length '{0}'")]
    ParseLength(String),

    /// an unknown color role token
    #[error("unknown color role '{0}'")]
    UnknownRole(String),

    /// a palette missing a required color role
    #[error("palette is missing color role '{0}'")]
    MissingRole(&'static str),

    /// a poisoned theme store lock
    #[error("theme store lock poisoned: {0}")]
    LockPoisoned(String),

    /// a json error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// a toml serialization error
    #[error("toml serialization error: {0}")]
    TOMLSer(#[from] toml::ser::Error),
}

/// A result using [`ThemeError`] as the `Err` variant
pub type Result<T, U = ThemeError> = std::result::Result<T, U>;
