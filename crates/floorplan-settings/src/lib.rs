//! Floor-plan Settings Crate
//!
//! Loads, validates and saves the editor settings file: layout engine
//! tuning plus logging preferences. Layouts themselves are never written.

pub mod config;
pub mod error;

pub use config::{LoggingSettings, Settings, SETTINGS_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
