use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_jvm-wrapper");
pub const CONFIG_FILE: &str = "jvm.config";

/// Scratch working directory with an optional `jvm.config`.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("can create temp directory"),
        }
    }

    pub fn with_config(contents: &str) -> Self {
        let workspace = Self::new();
        fs::write(workspace.config_path(), contents).expect("can write jvm.config");
        workspace
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(CONFIG_FILE)
    }

    /// Run the launcher inside this workspace with a scrubbed settings environment.
    pub fn run(&self, args: &[&str]) -> Output {
        launcher_command(self.path())
            .args(args)
            .output()
            .expect("launcher binary should start")
    }
}

pub fn launcher_command(cwd: &Path) -> Command {
    let mut command = Command::new(BINARY_PATH);
    command
        .current_dir(cwd)
        .env_remove("JVM_WRAPPER_CONFIG_PATH")
        .env_remove("JVM_WRAPPER_JAVA_HOME")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null());
    command
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
