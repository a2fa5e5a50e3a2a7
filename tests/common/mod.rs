//! Shared test utilities: a recording tmux fake and config fixtures.

#![allow(dead_code, unused_imports)]

use std::collections::HashMap;
use std::path::PathBuf;

use hostmux::tmux::{TmuxFailure, TmuxRunner};
use tempfile::TempDir;

/// Records every tmux call and answers like a live server.
///
/// `new-window -P` returns `@1 %0`; each `split-window -P` returns the next
/// pane id. Failures can be injected on the n-th call to a subcommand.
#[derive(Debug, Default)]
pub struct FakeTmux {
    pub calls: Vec<Vec<String>>,
    fail_on: Vec<(String, usize)>,
    seen: HashMap<String, usize>,
    next_pane: usize,
}

impl FakeTmux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `nth` (1-based) invocation of `subcommand`.
    pub fn failing(mut self, subcommand: &str, nth: usize) -> Self {
        self.fail_on.push((subcommand.to_string(), nth));
        self
    }

    /// First argument of every call, in order.
    pub fn subcommands(&self) -> Vec<&str> {
        self.calls.iter().map(|c| c[0].as_str()).collect()
    }

    pub fn calls_to(&self, subcommand: &str) -> Vec<&Vec<String>> {
        self.calls.iter().filter(|c| c[0] == subcommand).collect()
    }

    /// `set-window-option` calls as `(option, value)` pairs.
    pub fn window_options(&self) -> Vec<(String, String)> {
        self.calls_to("set-window-option")
            .into_iter()
            .map(|c| (c[3].clone(), c[4].clone()))
            .collect()
    }
}

impl TmuxRunner for FakeTmux {
    fn run(&mut self, args: &[String]) -> Result<String, TmuxFailure> {
        self.calls.push(args.to_vec());
        let sub = args[0].clone();
        let count = self.seen.entry(sub.clone()).or_insert(0);
        *count += 1;
        let nth = *count;

        if self.fail_on.iter().any(|(s, n)| *s == sub && *n == nth) {
            return Err(TmuxFailure::new(format!("{sub} failed: no space for new pane")));
        }

        let printing = args.iter().any(|a| a == "-P");
        match sub.as_str() {
            "new-window" if printing => Ok("@1 %0\n".to_string()),
            "split-window" if printing => {
                self.next_pane += 1;
                Ok(format!("%{}\n", self.next_pane))
            }
            _ => Ok(String::new()),
        }
    }
}

pub fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub const SAMPLE_CONFIG: &str = r#"
version = 1

[defaults]
user = "ops"
port = 22
extra_args = ["-o", "ServerAliveInterval=30"]
tmux = "auto"
open_mode = "auto"
tmux_session = "fleet"
pane_split = "horizontal"
pane_layout = "auto"

[[hosts]]
host = "db01"
user = "dba"
port = 2222

[[hosts]]
host = "bastion"
hidden = true

[[groups]]
name = "prod"
user = "root"
identity_file = "~/.ssh/prod"
hosts = ["web01", "web02", "db01"]

[[groups]]
name = "logs"
remote_command = "tail -f /var/log/syslog"
pane_sync = "off"
pane_border_status = "off"
hosts = ["[10.0.0.5]:2201"]
"#;
