//! tmux integration: open-mode policy, naming, pane layout and the
//! window/pane creation protocol.

mod commands;
mod layout;
mod mode;
mod naming;
mod runner;
mod window;

pub use commands::{new_session_cmd, new_window_cmd, TMUX_PROGRAM};
pub use layout::{resolve_pane_settings, PaneSettings};
pub use mode::{in_tmux, resolve_open_mode, OpenMode};
pub use naming::{group_window_name, window_name};
pub use runner::{SystemTmux, TmuxClient, TmuxFailure, TmuxRunner};
pub use window::{open_one_window, open_windows, OneWindowOpts};
