//! Pulse configuration file handling

use pulse_theme::ThemePreset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration (pulse.toml)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PulseConfig {
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub background: BackgroundConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Startup sequencing
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BootstrapConfig {
    /// How long the splash stays up before handing off to main
    #[serde(default = "default_splash_duration_ms")]
    pub splash_duration_ms: u64,
    /// Delay between the hand-off and the permission-reminder check
    #[serde(default = "default_permission_check_delay_ms")]
    pub permission_check_delay_ms: u64,
    /// Cancel pending timed steps when a scene is discarded
    #[serde(default = "default_true")]
    pub cancel_pending_on_teardown: bool,
    #[serde(default = "default_onboarding_flag_key")]
    pub onboarding_flag_key: String,
}

fn default_splash_duration_ms() -> u64 {
    1500
}

fn default_permission_check_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

fn default_onboarding_flag_key() -> String {
    "hasOnboarded".to_string()
}

impl BootstrapConfig {
    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }

    pub fn permission_check_delay(&self) -> Duration {
        Duration::from_millis(self.permission_check_delay_ms)
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            splash_duration_ms: default_splash_duration_ms(),
            permission_check_delay_ms: default_permission_check_delay_ms(),
            cancel_pending_on_teardown: true,
            onboarding_flag_key: default_onboarding_flag_key(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Preset used when nothing has been persisted yet
    #[serde(default = "default_preset")]
    pub preset: ThemePreset,
}

fn default_preset() -> ThemePreset {
    ThemePreset::Classic
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
        }
    }
}

/// Background capabilities
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BackgroundConfig {
    #[serde(default = "default_task_identifier")]
    pub task_identifier: String,
    #[serde(default = "default_true")]
    pub health_sync_enabled: bool,
}

fn default_task_identifier() -> String {
    "com.pulse.health.refresh".to_string()
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            task_identifier: default_task_identifier(),
            health_sync_enabled: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when no environment override is set
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl PulseConfig {
    /// Load configuration from a file, or from `pulse.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_path = if path.is_dir() {
            path.join("pulse.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_path,
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
