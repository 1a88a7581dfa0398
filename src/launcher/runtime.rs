//! Java runtime resolution and injection in front of flag-only commands.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::lib::{
    errors::RuntimeLocateError,
    paths::{java_executable_in, names_java_executable, JAVA_EXECUTABLE},
};

const JAVA_HOME_ENV: &str = "JAVA_HOME";
const FLAG_PREFIX: char = '-';

/// Source of the Java executable path prepended to flag-only commands.
pub trait RuntimeLocator {
    fn locate(&self) -> Result<PathBuf, RuntimeLocateError>;
}

/// Locator backed by an explicit Java home, `JAVA_HOME`, or `PATH`.
#[derive(Debug, Clone, Default)]
pub struct JavaRuntime {
    java_home: Option<PathBuf>,
}

impl JavaRuntime {
    pub fn new(java_home: Option<PathBuf>) -> Self {
        Self { java_home }
    }

    /// Resolve from explicit values (testable helper).
    fn locate_from(
        &self,
        java_home_env: Option<OsString>,
        path_env: Option<OsString>,
    ) -> Result<PathBuf, RuntimeLocateError> {
        let home = self
            .java_home
            .clone()
            .or_else(|| java_home_env.filter(|v| !v.is_empty()).map(PathBuf::from));

        if let Some(home) = home {
            let executable = java_executable_in(&home);
            if !executable.is_file() {
                return Err(RuntimeLocateError::MissingExecutable { path: executable });
            }
            debug!(
                target: "jvm_wrapper::runtime",
                home = %home.display(),
                executable = %executable.display(),
                "Resolved Java runtime from Java home"
            );
            return Ok(executable);
        }

        let cwd =
            env::current_dir().map_err(|source| RuntimeLocateError::CurrentDir { source })?;
        let executable = which::which_in(JAVA_EXECUTABLE, path_env, cwd)
            .map_err(|source| RuntimeLocateError::NotOnPath { source })?;
        debug!(
            target: "jvm_wrapper::runtime",
            executable = %executable.display(),
            "Resolved Java runtime from PATH"
        );
        Ok(executable)
    }
}

impl RuntimeLocator for JavaRuntime {
    fn locate(&self) -> Result<PathBuf, RuntimeLocateError> {
        self.locate_from(env::var_os(JAVA_HOME_ENV), env::var_os("PATH"))
    }
}

/// Locator that always answers with the same executable.
#[derive(Debug, Clone)]
pub struct FixedRuntime(pub PathBuf);

impl RuntimeLocator for FixedRuntime {
    fn locate(&self) -> Result<PathBuf, RuntimeLocateError> {
        Ok(self.0.clone())
    }
}

/// True when the first argument is a flag and does not name the Java executable.
pub fn needs_runtime(args: &[String]) -> bool {
    match args.first() {
        Some(first) => !names_java_executable(first) && first.starts_with(FLAG_PREFIX),
        None => false,
    }
}

/// Prepend `runtime` when [`needs_runtime`] holds; otherwise leave `args` untouched.
///
/// The path must be valid UTF-8, since it is spawned verbatim.
pub fn inject_runtime(
    args: &mut Vec<String>,
    runtime: &Path,
) -> Result<bool, RuntimeLocateError> {
    if !needs_runtime(args) {
        return Ok(false);
    }
    let runtime = runtime
        .to_str()
        .ok_or_else(|| RuntimeLocateError::NonUtf8Path {
            path: runtime.to_path_buf(),
        })?;
    args.insert(0, runtime.to_string());
    Ok(true)
}

/// Resolve through `locator` only when injection is needed.
pub fn inject_with(
    args: &mut Vec<String>,
    locator: &dyn RuntimeLocator,
) -> Result<bool, RuntimeLocateError> {
    if !needs_runtime(args) {
        return Ok(false);
    }
    let runtime = locator.locate()?;
    inject_runtime(args, &runtime)
}
