//! Command compiler — host address + settings → ssh argv.

use crate::error::ConnectError;
use crate::ssh::settings::Settings;

/// Program name at argv[0] of every compiled command.
pub const SSH_PROGRAM: &str = "ssh";

const DEFAULT_SSH_PORT: u32 = 22;

/// POSIX single-quote a string: `it's` → `'it'\''s'`.
pub fn shell_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Split a known_hosts style `[host]:port` address.
///
/// Returns `None` for anything that is not well-formed bracket notation
/// (missing brackets, empty host, non-numeric or zero port); such
/// addresses are used verbatim.
pub fn parse_bracket_host(s: &str) -> Option<(&str, u64)> {
    let rest = s.strip_prefix('[')?;
    let idx = rest.rfind("]:")?;
    let host = &rest[..idx];
    if host.is_empty() {
        return None;
    }
    let port: u64 = rest[idx + 2..].parse().ok()?;
    if port == 0 {
        return None;
    }
    Some((host, port))
}

/// Builder for an ssh argument vector. Each step appends in fixed order.
#[derive(Debug, Clone)]
pub struct SshCommand {
    args: Vec<String>,
}

impl SshCommand {
    pub fn new() -> Self {
        Self {
            args: vec![SSH_PROGRAM.to_string()],
        }
    }

    /// `-i <path>` when set.
    pub fn with_identity(mut self, identity_file: &str) -> Self {
        if !identity_file.is_empty() {
            self.args.push("-i".into());
            self.args.push(identity_file.into());
        }
        self
    }

    /// `-p <port>` unless the port is unset or the ssh default.
    pub fn with_port(mut self, port: u32) -> Self {
        if port != 0 && port != DEFAULT_SSH_PORT {
            self.args.push("-p".into());
            self.args.push(port.to_string());
        }
        self
    }

    pub fn with_extra(mut self, extra: &[String]) -> Self {
        self.args.extend(extra.iter().cloned());
        self
    }

    /// `user@host`, or bare `host` when user is empty.
    pub fn with_destination(mut self, user: &str, host: &str) -> Self {
        if user.is_empty() {
            self.args.push(host.into());
        } else {
            self.args.push(format!("{user}@{host}"));
        }
        self
    }

    /// Collapse the remote script into one `sh -c '<script>'` token.
    ///
    /// ssh joins multiple remote-command args with spaces before handing
    /// them to the login shell, which would re-split the script.
    pub fn with_remote_command(mut self, command: &str) -> Self {
        let command = command.trim();
        if !command.is_empty() {
            self.args.push(format!("sh -c {}", shell_quote(command)));
        }
        self
    }

    pub fn build(self) -> Vec<String> {
        self.args
    }
}

impl Default for SshCommand {
    fn default() -> Self {
        Self::new()
    }
}

fn checked_port(host: &str, port: u64) -> Result<u32, ConnectError> {
    if port > u64::from(u16::MAX) {
        return Err(ConnectError::InvalidPort {
            host: host.to_string(),
            port: port.to_string(),
        });
    }
    Ok(port as u32)
}

/// Compile the ssh argv for `host` under `settings`.
///
/// A bracketed `[host]:port` address overrides `settings.port`.
pub fn compile(host: &str, settings: &Settings) -> Result<Vec<String>, ConnectError> {
    let host = host.trim();
    if host.is_empty() {
        return Ok(vec![SSH_PROGRAM.to_string()]);
    }

    let (address, port) = match parse_bracket_host(host) {
        Some((address, port)) => (address, port),
        None => (host, u64::from(settings.port)),
    };
    let port = checked_port(host, port)?;

    Ok(SshCommand::new()
        .with_identity(&settings.identity_file)
        .with_port(port)
        .with_extra(&settings.extra_args)
        .with_destination(&settings.user, address)
        .with_remote_command(&settings.remote_command)
        .build())
}
