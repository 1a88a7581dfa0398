use crate::common::{stdout_of, Workspace};

#[test]
fn help_lists_override_flags() {
    let workspace = Workspace::new();

    let output = workspace.run(&["--help"]);

    assert!(output.status.success(), "--help should succeed");
    let stdout = stdout_of(&output);
    for needle in ["--config", "--java-home", "jvm.config"] {
        assert!(
            stdout.contains(needle),
            "--help should mention {needle}, got:\n{stdout}"
        );
    }
    assert!(
        !workspace.config_path().exists(),
        "--help must not create jvm.config"
    );
}

#[test]
fn version_prints_package_version() {
    let workspace = Workspace::new();

    let output = workspace.run(&["--version"]);

    assert!(output.status.success(), "--version should succeed");
    assert!(
        stdout_of(&output).contains(env!("CARGO_PKG_VERSION")),
        "stdout: {}",
        stdout_of(&output)
    );
}

#[test]
fn unknown_flag_is_rejected_without_launching() {
    let workspace = Workspace::new();

    let output = workspace.run(&["--bogus"]);

    assert!(!output.status.success());
    assert!(
        !workspace.config_path().exists(),
        "a rejected invocation must not create jvm.config"
    );
}
