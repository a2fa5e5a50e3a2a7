//! ssh command construction.
//!
//! ```text
//! Defaults → HostOverride → Group → Settings → compile() → ["ssh", ...]
//! ```
//!
//! Both stages are pure; the only failure is an out-of-range port.

mod command;
mod session;
mod settings;

pub use command::{compile, parse_bracket_host, shell_quote, SshCommand, SSH_PROGRAM};
pub use session::{ensure_force_tty, keep_session_open};
pub use settings::{resolve, Settings};
