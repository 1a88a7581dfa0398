//! Utilities for the launcher's one-line config file.

use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::lib::errors::ConfigFileError;

/// File name looked up in the working directory when nothing overrides it.
pub const DEFAULT_CONFIG_FILE: &str = "jvm.config";
/// Command written into a freshly created config file.
pub const DEFAULT_COMMAND: &str =
    "java -Xms128M -Xmx7168M -Dterminal.jline=false -Dterminal.ansi=true -jar server.jar";

const COMMENT_PREFIX: char = '#';

/// Short name used in user-facing messages (`jvm.config` rather than the full path).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Write the default command into a new file at `path`.
///
/// Never truncates: if the file shows up between the existence check and this
/// call, it is left as is.
pub fn create_default_config(path: &Path) -> Result<(), ConfigFileError> {
    let create_error = |source: io::Error| ConfigFileError::Create {
        name: display_name(path),
        path: path.to_path_buf(),
        source,
    };

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            debug!(
                target: "jvm_wrapper::config",
                path = %path.display(),
                "Config file appeared before creation; keeping it"
            );
            return Ok(());
        }
        Err(err) => return Err(create_error(err)),
    };
    file.write_all(DEFAULT_COMMAND.as_bytes())
        .and_then(|_| file.flush())
        .map_err(create_error)?;

    info!(
        target: "jvm_wrapper::config",
        path = %path.display(),
        "Created default config file"
    );
    Ok(())
}

/// Return the first non-blank, non-comment line of `path`, trimmed.
pub fn read_command_line(path: &Path) -> Result<String, ConfigFileError> {
    let read_error = |source: io::Error| ConfigFileError::Read {
        name: display_name(path),
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let line = first_command_line(BufReader::new(file)).map_err(read_error)?;

    match line {
        Some(line) => {
            debug!(
                target: "jvm_wrapper::config",
                path = %path.display(),
                command_line = %line,
                "Read command line"
            );
            Ok(line)
        }
        None => Err(ConfigFileError::Empty {
            name: display_name(path),
            path: path.to_path_buf(),
        }),
    }
}

/// Scan `reader` for the first line that is neither blank nor a `#` comment.
pub fn first_command_line(reader: impl BufRead) -> io::Result<Option<String>> {
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with(COMMENT_PREFIX) {
            return Ok(Some(trimmed.to_string()));
        }
    }
    Ok(None)
}
