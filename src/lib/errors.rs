use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors raised while preparing or reading `jvm.config`.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The file was missing and the default could not be written.
    #[error("Failed to create {name}")]
    Create {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file exists but could not be read.
    #[error("Failed to read {name}")]
    Read {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Every line is blank or a comment.
    #[error("Error: {name} is empty.")]
    Empty { name: String, path: PathBuf },
}

/// Errors that can occur while loading launcher settings from the environment.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to collect the environment source.
    #[error("Failed to read launcher settings from environment")]
    Read {
        #[source]
        source: ConfigLoaderError,
    },
    /// Collected values did not match the settings shape.
    #[error("Failed to parse launcher settings")]
    Parse {
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Launcher setting `{field}` is invalid: {message}")]
    InvalidField { field: &'static str, message: String },
}

/// Failure to find a Java executable to inject in front of flag-only commands.
#[derive(Debug, Error)]
pub enum RuntimeLocateError {
    #[error("Java executable {path} does not exist")]
    MissingExecutable { path: PathBuf },
    #[error("No Java runtime found: set JAVA_HOME or put `java` on PATH")]
    NotOnPath {
        #[source]
        source: which::Error,
    },
    #[error("Failed to obtain current directory for PATH lookup")]
    CurrentDir {
        #[source]
        source: io::Error,
    },
    #[error("Java executable path {path} is not valid UTF-8")]
    NonUtf8Path { path: PathBuf },
}

/// Failures of the launch step itself.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Error: Could not parse command from {name}")]
    EmptyCommand { name: String },
    #[error("Failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while waiting for `{program}`")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Runtime(#[from] RuntimeLocateError),
}
