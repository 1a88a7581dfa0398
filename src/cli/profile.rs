//! LaunchProfile and config/Java home resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::lib::fs::DEFAULT_CONFIG_FILE;

/// Resolved launch profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchProfile {
    pub config_path: PathBuf,
    pub java_home: Option<PathBuf>,
}

/// Resolve config path in the order: CLI override → settings → default.
pub fn resolve_config_path(
    override_path: Option<PathBuf>,
    settings_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let path = override_path
        .or(settings_path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    absolutize(path)
}

/// Resolve an explicit Java home: CLI override → settings. `JAVA_HOME` is left to the runtime locator.
pub fn resolve_java_home(
    override_home: Option<PathBuf>,
    settings_home: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    override_home.or(settings_home).map(absolutize).transpose()
}

fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}
