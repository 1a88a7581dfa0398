//! Launcher settings read from `JVM_WRAPPER_*` environment variables.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, error};

use crate::lib::{errors::SettingsError, paths::is_nonempty_absolute};

pub const SETTINGS_ENV_PREFIX: &str = "JVM_WRAPPER";

/// Values that may override the defaults without touching the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherSettings {
    pub config_path: Option<PathBuf>,
    pub java_home: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawLauncherSettings {
    config_path: Option<String>,
    java_home: Option<String>,
}

impl LauncherSettings {
    /// Read settings from the process environment.
    pub fn load_from_env() -> Result<Self, SettingsError> {
        Self::load_from_source(None)
    }

    /// Read settings from `source` instead of the process environment when given.
    pub fn load_from_source(
        source: Option<config::Map<String, String>>,
    ) -> Result<Self, SettingsError> {
        let environment = config::Environment::with_prefix(SETTINGS_ENV_PREFIX).source(source);
        let document = config::Config::builder()
            .add_source(environment)
            .build()
            .map_err(|source| {
                let error = SettingsError::Read { source };
                error!(
                    target: "jvm_wrapper::settings",
                    reason = %error,
                    "Failed to read launcher settings"
                );
                error
            })?;

        let raw: RawLauncherSettings = document
            .try_deserialize()
            .map_err(|source| SettingsError::Parse { source })?;

        let settings = Self::from_raw(raw)?;
        debug!(
            target: "jvm_wrapper::settings",
            config_path = ?settings.config_path,
            java_home = ?settings.java_home,
            "Loaded launcher settings"
        );
        Ok(settings)
    }

    fn from_raw(raw: RawLauncherSettings) -> Result<Self, SettingsError> {
        let config_path = non_blank(raw.config_path).map(PathBuf::from);
        let java_home = non_blank(raw.java_home).map(PathBuf::from);

        if let Some(home) = &java_home {
            if !is_nonempty_absolute(home) {
                return Err(SettingsError::InvalidField {
                    field: "java_home",
                    message: format!("expected an absolute path, got {}", home.display()),
                });
            }
        }

        Ok(Self {
            config_path,
            java_home,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
