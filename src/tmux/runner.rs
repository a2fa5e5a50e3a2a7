//! The seam between dispatch logic and the tmux binary.
//!
//! Every call goes through [`TmuxClient`] as either *structural* (a failure
//! aborts the dispatch) or *cosmetic* (a failure is logged and dropped).

use std::process::Command;

use crate::error::ConnectError;
use crate::tmux::commands::TMUX_PROGRAM;

/// A tmux invocation that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxFailure {
    /// tmux's own output when it printed any, else the exit status text.
    pub message: String,
}

impl TmuxFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Executes one tmux command (argv without the leading `tmux`) and
/// returns its stdout.
pub trait TmuxRunner {
    fn run(&mut self, args: &[String]) -> Result<String, TmuxFailure>;
}

/// Runs the real `tmux` binary, blocking until it exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTmux;

impl TmuxRunner for SystemTmux {
    fn run(&mut self, args: &[String]) -> Result<String, TmuxFailure> {
        tracing::trace!(?args, "tmux");
        let output = Command::new(TMUX_PROGRAM)
            .args(args)
            .output()
            .map_err(|e| TmuxFailure::new(format!("failed to run {TMUX_PROGRAM}: {e}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = format!("{}{}", stderr, stdout);
        let message = match combined.trim() {
            "" => output.status.to_string(),
            msg => msg.to_string(),
        };
        Err(TmuxFailure::new(message))
    }
}

/// Wraps a runner and enforces the structural / cosmetic split.
pub struct TmuxClient<'a, R: TmuxRunner + ?Sized> {
    runner: &'a mut R,
}

impl<'a, R: TmuxRunner + ?Sized> TmuxClient<'a, R> {
    pub fn new(runner: &'a mut R) -> Self {
        Self { runner }
    }

    /// A call whose failure must abort: window or pane creation.
    pub fn structural(&mut self, args: &[String]) -> Result<String, ConnectError> {
        self.runner
            .run(args)
            .map_err(|f| ConnectError::MultiplexerCommandFailed {
                message: f.message,
                opened: 0,
            })
    }

    /// A call that only affects presentation; failures are swallowed.
    pub fn cosmetic(&mut self, args: &[String]) {
        if let Err(f) = self.runner.run(args) {
            tracing::debug!(?args, error = %f.message, "Ignoring tmux failure");
        }
    }
}

/// Shorthand for building an owned argv from literals.
pub(crate) fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl TmuxRunner for Failing {
        fn run(&mut self, _args: &[String]) -> Result<String, TmuxFailure> {
            Err(TmuxFailure::new("no server running"))
        }
    }

    #[test]
    fn structural_failure_becomes_error() {
        let mut runner = Failing;
        let mut client = TmuxClient::new(&mut runner);
        let err = client.structural(&argv(&["new-window"])).unwrap_err();
        match err {
            ConnectError::MultiplexerCommandFailed { message, opened } => {
                assert_eq!(message, "no server running");
                assert_eq!(opened, 0);
            }
            other => panic!("Expected MultiplexerCommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn cosmetic_failure_is_swallowed() {
        let mut runner = Failing;
        let mut client = TmuxClient::new(&mut runner);
        client.cosmetic(&argv(&["select-layout", "tiled"]));
    }
}
