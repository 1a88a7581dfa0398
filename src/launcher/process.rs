//! Foreground child process with inherited stdio.

use std::process::{Command, ExitStatus, Stdio};

use tracing::info;

use crate::lib::{errors::LaunchError, telemetry::LaunchSpan};

/// Exit code used when the child ended without one.
const FALLBACK_EXIT_CODE: i32 = 1;

/// Build the child command; `args[0]` is the program.
pub fn build_command(program: &str, args: &[String]) -> Command {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}

/// Spawn `argv`, block until it exits and return its exit code.
pub fn spawn_and_wait(argv: &[String]) -> Result<i32, LaunchError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(LaunchError::EmptyCommand {
            name: String::from("command"),
        });
    };

    let span = LaunchSpan::start(program, args.len());
    let mut child = match build_command(program, args).spawn() {
        Ok(child) => child,
        Err(source) => {
            span.finish("spawn_failed", None);
            return Err(LaunchError::Spawn {
                program: program.clone(),
                source,
            });
        }
    };
    info!(
        target: "jvm_wrapper::launch",
        pid = child.id(),
        program = %program,
        "Spawned child process"
    );

    let status = child.wait().map_err(|source| LaunchError::Wait {
        program: program.clone(),
        source,
    })?;
    let code = exit_code(status);
    let outcome = if status.success() {
        "succeeded"
    } else {
        "failed"
    };
    span.finish(outcome, Some(code));
    Ok(code)
}

/// Map a child's status onto the code this process exits with.
pub fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) => 128 + signal,
        None => FALLBACK_EXIT_CODE,
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> i32 {
    FALLBACK_EXIT_CODE
}
