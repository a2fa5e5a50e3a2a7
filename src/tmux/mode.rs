//! Open-mode resolver.

use std::ffi::OsString;
use std::fmt;

/// Where a connection is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenMode {
    /// Replace the current process with ssh.
    Current,
    /// A new tmux window.
    Window,
    /// A pane inside one shared tmux window.
    Pane,
}

impl OpenMode {
    /// Config spelling of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenMode::Current => "current",
            OpenMode::Window => "tmux-window",
            OpenMode::Pane => "tmux-pane",
        }
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map `(tmux policy, open_mode policy, inside tmux)` to an [`OpenMode`].
///
/// Case- and whitespace-insensitive. Unknown values behave like `auto`.
pub fn resolve_open_mode(tmux: &str, open_mode: &str, in_tmux: bool) -> OpenMode {
    let tmux = tmux.trim().to_lowercase();
    let open_mode = open_mode.trim().to_lowercase();

    match tmux.as_str() {
        "never" => return OpenMode::Current,
        "force" => {
            return if open_mode == OpenMode::Pane.as_str() {
                OpenMode::Pane
            } else {
                OpenMode::Window
            };
        }
        _ => {}
    }

    match open_mode.as_str() {
        "current" => OpenMode::Current,
        "tmux-window" => OpenMode::Window,
        "tmux-pane" => OpenMode::Pane,
        _ if in_tmux => OpenMode::Window,
        _ => OpenMode::Current,
    }
}

/// Whether this process runs inside a tmux client.
pub fn in_tmux() -> bool {
    in_tmux_from(std::env::var_os("TMUX"))
}

fn in_tmux_from(value: Option<OsString>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
