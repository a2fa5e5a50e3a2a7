//! Connection resolution and multiplex dispatch for SSH hosts.
//!
//! ```text
//! Defaults/Host/Group → Settings → ssh argv → OpenMode → dispatch (exec | tmux)
//! ```

pub mod config;
pub mod connect;
pub mod dispatch;
pub mod error;
pub mod exec;
pub mod ssh;
pub mod tmux;

pub use error::ConnectError;
