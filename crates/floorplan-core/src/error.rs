//! Error handling for the floor-plan editor
//!
//! The geometric operations of the layout engine are total and never fail;
//! missing results are modelled with `Option`. The error types here cover
//! the fallible edges only:
//! - Configuration errors (invalid tuning values)
//! - I/O errors surfaced by hosts
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type
///
/// Raised when a tuning value of the layout engine is unusable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value is NaN or infinite
    #[error("Configuration value '{key}' must be finite, got {value}")]
    NotFinite {
        /// The configuration key.
        key: String,
        /// The offending value.
        value: f64,
    },

    /// Value is zero or negative
    #[error("Configuration value '{key}' must be > 0, got {value}")]
    NotPositive {
        /// The configuration key.
        key: String,
        /// The offending value.
        value: f64,
    },

    /// Generic configuration error
    #[error("Configuration error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

impl ConfigError {
    /// Returns the configuration key the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::NotFinite { key, .. } | Self::NotPositive { key, .. } => Some(key),
            Self::Other { .. } => None,
        }
    }
}
