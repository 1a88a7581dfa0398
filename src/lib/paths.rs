//! Java executable naming rules shared by detection and injection.

use std::path::{Path, PathBuf};

/// Bare name of the runtime executable.
pub const JAVA_EXECUTABLE: &str = "java";
/// Name with the Windows executable suffix; accepted on every platform.
pub const JAVA_EXECUTABLE_EXE: &str = "java.exe";

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// True when `arg` already names the Java executable (`java`, `/usr/bin/java`, `java.exe`).
pub fn names_java_executable(arg: &str) -> bool {
    arg.ends_with(JAVA_EXECUTABLE) || arg.ends_with(JAVA_EXECUTABLE_EXE)
}

/// `<home>/bin/java`, with the platform executable suffix appended.
pub fn java_executable_in(home: &Path) -> PathBuf {
    let file_name = format!("{JAVA_EXECUTABLE}{}", std::env::consts::EXE_SUFFIX);
    home.join("bin").join(file_name)
}
