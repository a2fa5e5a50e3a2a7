//! Host inventory and connection defaults, loaded from TOML.

mod loader;
mod lookup;
mod types;

pub use loader::{validate_group_name, ConfigError};
pub use types::{Config, Defaults, Group, HostOverride, DEFAULT_PANE_BORDER_FORMAT};
