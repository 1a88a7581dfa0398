use anyhow::Error;
use tracing::info;

use crate::{
    cli::LaunchProfile,
    launcher::{
        process::spawn_and_wait,
        runtime::{inject_with, JavaRuntime, RuntimeLocator},
        tokenizer::tokenize,
    },
    lib::{
        errors::{ConfigFileError, LaunchError},
        fs::{create_default_config, display_name, read_command_line},
    },
};

/// Exit code for every failure of the launcher itself.
pub const INTERNAL_FAILURE_CODE: i32 = 1;

/// Bundles a launcher error message with the exit code to report.
#[derive(Debug)]
pub struct LaunchExit {
    message: String,
    exit_code: i32,
}

impl LaunchExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: INTERNAL_FAILURE_CODE,
        }
    }

    /// Print the message on stderr and hand back the exit code.
    pub fn report(self) -> i32 {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl From<ConfigFileError> for LaunchExit {
    fn from(value: ConfigFileError) -> Self {
        Self::from_error(value)
    }
}

impl From<LaunchError> for LaunchExit {
    fn from(value: LaunchError) -> Self {
        Self::from_error(value)
    }
}

/// Run the configured command and return the child's exit code.
pub fn run_launcher(profile: &LaunchProfile) -> Result<i32, LaunchExit> {
    let runtime = JavaRuntime::new(profile.java_home.clone());
    run_with_locator(profile, &runtime)
}

/// Same as [`run_launcher`] with the runtime locator supplied by the caller.
pub fn run_with_locator(
    profile: &LaunchProfile,
    locator: &dyn RuntimeLocator,
) -> Result<i32, LaunchExit> {
    let argv = prepare_command(profile, locator)?;

    println!("Launching: {}", argv.join(" "));
    info!(
        target: "jvm_wrapper::launch",
        argv = ?argv,
        "Launching configured command"
    );

    // exit status is recorded by the launch span; stderr belongs to the child now
    spawn_and_wait(&argv).map_err(LaunchExit::from)
}

/// Read, tokenize and complete the command without spawning it.
pub fn prepare_command(
    profile: &LaunchProfile,
    locator: &dyn RuntimeLocator,
) -> Result<Vec<String>, LaunchExit> {
    let path = profile.config_path.as_path();
    let name = display_name(path);

    if !path.exists() {
        println!("{name} not found. Creating default...");
        create_default_config(path)?;
        println!("Created {name} with default command.");
    }

    let line = read_command_line(path)?;
    let mut argv = tokenize(&line);
    if argv.is_empty() {
        return Err(LaunchError::EmptyCommand { name }.into());
    }

    if inject_with(&mut argv, locator).map_err(LaunchError::from)? {
        info!(
            target: "jvm_wrapper::runtime",
            runtime = %argv[0],
            "Prepended Java runtime to flag-only command"
        );
    }
    Ok(argv)
}
