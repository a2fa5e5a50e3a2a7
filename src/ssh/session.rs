//! Adjustments for "run a command, then stay on the host" connects.

use crate::ssh::settings::Settings;

/// Append `-t` unless a TTY flag is already present.
pub fn ensure_force_tty(extra_args: &[String]) -> Vec<String> {
    let mut out = extra_args.to_vec();
    if !out.iter().any(|a| a == "-t" || a == "-tt") {
        out.push("-t".into());
    }
    out
}

/// Follow the remote command with an interactive shell so the session
/// survives it. Idempotent.
pub fn keep_session_open(command: &str) -> String {
    let command = command.trim();
    if command.is_empty() {
        return String::new();
    }
    if command.contains("exec ${SHELL") || command.contains("exec $SHELL") {
        return command.to_string();
    }
    format!("{command}; exec ${{SHELL:-sh}}")
}

impl Settings {
    /// Force a TTY and keep the login shell open after the remote command.
    /// No-op when no remote command is set.
    pub fn keep_open(mut self) -> Self {
        if self.remote_command.trim().is_empty() {
            return self;
        }
        self.extra_args = ensure_force_tty(&self.extra_args);
        self.remote_command = keep_session_open(&self.remote_command);
        self
    }
}
