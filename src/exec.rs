//! Process replacement.
//!
//! An [`ExecRequest`] is a one-way handoff: on success the current process
//! image is replaced and nothing after the call runs. Stdio and the
//! controlling terminal are inherited unchanged.

use std::process::Command;

use crate::error::ConnectError;

/// An argv to run in place of the current process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecRequest {
    argv: Vec<String>,
}

impl ExecRequest {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// argv[0]: `ssh` or `tmux`.
    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }

    /// Replace the current process. Only returns on failure.
    pub fn exec(self) -> ConnectError {
        let Some((program, args)) = self.argv.split_first() else {
            return ConnectError::Exec {
                program: String::new(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty exec command"),
            };
        };

        let path = match which::which(program) {
            Ok(path) => path,
            Err(source) => {
                return ConnectError::ExecutableNotFound {
                    program: program.clone(),
                    source,
                }
            }
        };
        tracing::debug!(path = %path.display(), ?args, "exec");

        let mut command = Command::new(&path);
        command.args(args);
        replace(command, program)
    }
}

#[cfg(unix)]
fn replace(mut command: Command, program: &str) -> ConnectError {
    use std::os::unix::process::CommandExt;

    let source = command.arg0(program).exec();
    ConnectError::Exec {
        program: program.to_string(),
        source,
    }
}

/// No exec(2) here: run the child to completion, then exit with its code.
#[cfg(not(unix))]
fn replace(mut command: Command, program: &str) -> ConnectError {
    match command.status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => ConnectError::Exec {
            program: program.to_string(),
            source,
        },
    }
}
