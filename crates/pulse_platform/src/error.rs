//! Platform error types

use std::path::PathBuf;
use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Reading or writing a preference file failed
    #[error("Preference store I/O failed for {path}: {source}")]
    PreferenceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Preference file exists but is not valid TOML
    #[error("Preference store at {path} is corrupt: {source}")]
    PreferenceDecode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Preferences could not be serialized
    #[error("Failed to encode preferences: {0}")]
    PreferenceEncode(#[from] toml::ser::Error),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
