use std::fs;

use crate::common::{launcher_command, stderr_of, stdout_of, Workspace, CONFIG_FILE};

const DEFAULT_COMMAND: &str =
    "java -Xms128M -Xmx7168M -Dterminal.jline=false -Dterminal.ansi=true -jar server.jar";

#[test]
fn missing_config_is_created_with_default_command() {
    let workspace = Workspace::new();

    let output = workspace.run(&[]);

    let contents = fs::read_to_string(workspace.config_path()).expect("jvm.config was created");
    assert_eq!(contents, DEFAULT_COMMAND);
    let stdout = stdout_of(&output);
    assert!(
        stdout.contains("jvm.config not found. Creating default..."),
        "stdout: {stdout}"
    );
    assert!(
        stdout.contains("Created jvm.config with default command."),
        "stdout: {stdout}"
    );
}

#[test]
fn comment_only_config_exits_with_one() {
    let workspace = Workspace::with_config("# start command goes here\n\n   \n# another\n");

    let output = workspace.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("jvm.config is empty"), "stderr: {stderr}");
    assert!(
        !stdout_of(&output).contains("Launching:"),
        "nothing should be launched"
    );
}

#[test]
fn unparsable_command_exits_with_one() {
    let workspace = Workspace::with_config("''\n");

    let output = workspace.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Could not parse command from jvm.config"),
        "stderr: {stderr}"
    );
}

#[test]
fn missing_program_exits_with_one() {
    let workspace = Workspace::with_config("jvm-wrapper-no-such-program --flag\n");

    let output = workspace.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("jvm-wrapper-no-such-program"),
        "stderr: {}",
        stderr_of(&output)
    );
}

#[cfg(unix)]
#[test]
fn child_exit_code_is_forwarded() {
    let workspace = Workspace::with_config("# exits with 7\nsh -c \"exit 7\"\n");

    let output = workspace.run(&[]);

    assert_eq!(output.status.code(), Some(7));
    assert!(
        stdout_of(&output).contains("Launching: sh -c exit 7"),
        "stdout: {}",
        stdout_of(&output)
    );
    assert!(
        output.stderr.is_empty(),
        "a non-zero child exit is forwarded silently, stderr: {:?}",
        stderr_of(&output)
    );
}

#[test]
fn config_creation_failure_exits_with_one() {
    let workspace = Workspace::new();
    let unwritable = workspace.path().join("missing-dir").join(CONFIG_FILE);

    let output = workspace.run(&["--config", unwritable.to_str().expect("utf-8 path")]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Failed to create jvm.config: "),
        "stderr: {stderr}"
    );
    assert!(
        stdout_of(&output).contains("jvm.config not found. Creating default..."),
        "stdout: {}",
        stdout_of(&output)
    );
    assert!(!unwritable.exists());
}

#[cfg(unix)]
#[test]
fn child_inherits_stdout() {
    let workspace = Workspace::with_config("sh -c 'echo from-child'\n");

    let output = workspace.run(&[]);

    assert!(output.status.success(), "status: {:?}", output.status);
    assert!(
        stdout_of(&output).contains("from-child"),
        "stdout: {}",
        stdout_of(&output)
    );
}

#[cfg(unix)]
#[test]
fn flag_only_command_runs_java_from_java_home() {
    let workspace = Workspace::with_config("-c \"exit 3\"\n");
    let java_home = workspace.path().join("jdk");
    fs::create_dir_all(java_home.join("bin")).expect("can create bin directory");
    // stand-in runtime: the injected `<home>/bin/java` is a shell
    std::os::unix::fs::symlink("/bin/sh", java_home.join("bin").join("java"))
        .expect("can link stand-in java");

    let output = workspace.run(&["--java-home", java_home.to_str().expect("utf-8 path")]);

    assert_eq!(output.status.code(), Some(3));
    let expected = format!("Launching: {}/bin/java -c exit 3", java_home.display());
    assert!(
        stdout_of(&output).contains(&expected),
        "stdout: {}",
        stdout_of(&output)
    );
}

#[cfg(unix)]
#[test]
fn config_path_can_come_from_environment() {
    let workspace = Workspace::new();
    let custom = workspace.path().join("lobby.config");
    fs::write(&custom, "sh -c \"exit 5\"\n").expect("can write custom config");

    let output = launcher_command(workspace.path())
        .env("JVM_WRAPPER_CONFIG_PATH", &custom)
        .output()
        .expect("launcher binary should start");

    assert_eq!(output.status.code(), Some(5));
    assert!(
        !workspace.path().join(CONFIG_FILE).exists(),
        "default jvm.config must not be created when a custom path is set"
    );
}

#[test]
fn unresolvable_runtime_exits_with_one() {
    let workspace = Workspace::with_config("-Xmx1G -jar server.jar\n");
    let empty_home = workspace.path().join("empty-jdk");
    fs::create_dir_all(&empty_home).expect("can create empty home");

    let output = workspace.run(&["--java-home", empty_home.to_str().expect("utf-8 path")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("does not exist"),
        "stderr: {}",
        stderr_of(&output)
    );
}
