//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_config_path, resolve_java_home, LaunchProfile};
use crate::launcher::settings::LauncherSettings;

/// Command-line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    author,
    version,
    about = "Launch the Java command stored in jvm.config",
    long_about = "Reads the first non-comment line of jvm.config (creating a default one when it is missing), \
                  splits it with shell-like quoting, prepends the Java executable when the line starts with a flag, \
                  and runs it in the foreground with inherited stdio. The child's exit code becomes this process's exit code."
)]
pub struct LaunchArgs {
    /// Path to the config file (overrides JVM_WRAPPER_CONFIG_PATH).
    #[arg(long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
    /// Java home used when the command starts with a flag (overrides JVM_WRAPPER_JAVA_HOME and JAVA_HOME).
    #[arg(long = "java-home", value_name = "DIR")]
    pub java_home_override: Option<PathBuf>,
}

impl LaunchArgs {
    /// Build a `LaunchProfile` from CLI args and environment settings.
    pub fn build(self, settings: LauncherSettings) -> Result<LaunchProfile> {
        let config_path = resolve_config_path(self.config_override, settings.config_path)?;
        let java_home = resolve_java_home(self.java_home_override, settings.java_home)?;

        Ok(LaunchProfile {
            config_path,
            java_home,
        })
    }
}
