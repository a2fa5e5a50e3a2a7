//! Error taxonomy for a single connect attempt.
//!
//! Every variant is terminal for the current dispatch; the caller decides
//! how to present it.

use thiserror::Error;

/// Errors produced while compiling or dispatching SSH connections.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// Dispatch was called with an empty host list.
    #[error("no host selected")]
    NoHostsSelected,

    /// Current-terminal mode cannot open more than one host.
    #[error("multi-host requires tmux (set open_mode to tmux-window or tmux-pane)")]
    MultiHostRequiresMultiplexer,

    /// Not inside tmux and more than one host was selected.
    #[error("multi-host requires an active tmux session")]
    MultiHostRequiresSession,

    /// A structural tmux invocation returned non-zero.
    ///
    /// `opened` counts the windows or panes created before the failure.
    #[error("tmux error: {message}")]
    MultiplexerCommandFailed { message: String, opened: usize },

    /// A port did not fit the valid TCP port range.
    #[error("invalid port {port} for host '{host}'")]
    InvalidPort { host: String, port: String },

    /// The program to exec is not on PATH.
    #[error("{program}: executable not found: {source}")]
    ExecutableNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    /// The exec syscall itself failed.
    #[error("failed to exec {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConnectError {
    /// Record how many windows or panes were opened before a tmux failure.
    pub(crate) fn with_opened(self, opened: usize) -> Self {
        match self {
            ConnectError::MultiplexerCommandFailed { message, .. } => {
                ConnectError::MultiplexerCommandFailed { message, opened }
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplexer_failure_message_is_verbatim() {
        let err = ConnectError::MultiplexerCommandFailed {
            message: "no server running on /tmp/tmux-1000/default".to_string(),
            opened: 0,
        };
        assert_eq!(
            err.to_string(),
            "tmux error: no server running on /tmp/tmux-1000/default"
        );
    }

    #[test]
    fn invalid_port_names_host() {
        let err = ConnectError::InvalidPort {
            host: "db01".to_string(),
            port: "70000".to_string(),
        };
        assert!(err.to_string().contains("db01"));
        assert!(err.to_string().contains("70000"));
    }
}
