use serde::{Deserialize, Serialize};

/// Built-in tmux pane border format: pane title plus a red `[SYNC]` marker
/// while synchronize-panes is on.
pub const DEFAULT_PANE_BORDER_FORMAT: &str = concat!(
    "#[bg=green,fg=black] #T",
    "#{?pane_synchronized, #[fg=colour196]#[bold][SYNC]#[default],}",
    " #[default]"
);

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    /// Hosts excluded from `list hosts`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hidden_hosts: Vec<String>,
    pub defaults: Defaults,
    pub hosts: Vec<HostOverride>,
    pub groups: Vec<Group>,
}

/// Process-wide baseline connection settings and tmux policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub user: String,
    /// 0 means "use 22".
    pub port: u32,
    pub identity_file: String,
    pub extra_args: Vec<String>,
    /// horizontal | vertical
    pub pane_split: String,
    /// auto | tiled | even-horizontal | even-vertical | main-horizontal | main-vertical
    pub pane_layout: String,
    /// on | off
    pub pane_sync: String,
    pub pane_border_format: String,
    /// off | top | bottom
    pub pane_border_status: String,
    /// auto | force | never
    pub tmux: String,
    /// auto | current | tmux-window | tmux-pane
    pub open_mode: String,
    pub tmux_session: String,
}

/// Per-host override, applied by exact address match.
///
/// ```toml
/// [[hosts]]
/// host = "db01.example.com"
/// user = "admin"
/// extra_args = ["-o", "ServerAliveInterval=30"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostOverride {
    pub host: String,
    pub user: String,
    pub port: u32,
    pub identity_file: String,
    pub extra_args: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

/// A named set of hosts with optional connection and tmux overrides.
///
/// Set fields win over both [`Defaults`] and any [`HostOverride`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub name: String,
    pub user: String,
    pub port: u32,
    pub identity_file: String,
    pub extra_args: Vec<String>,
    pub remote_command: String,
    pub pane_split: String,
    pub pane_layout: String,
    pub pane_sync: String,
    pub pane_border_format: String,
    pub pane_border_status: String,
    pub tmux: String,
    pub open_mode: String,
    pub hosts: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            user: String::new(),
            port: 22,
            identity_file: String::new(),
            extra_args: Vec::new(),
            pane_split: "vertical".to_string(),
            pane_layout: "even-vertical".to_string(),
            pane_sync: "on".to_string(),
            pane_border_format: DEFAULT_PANE_BORDER_FORMAT.to_string(),
            pane_border_status: "bottom".to_string(),
            tmux: "auto".to_string(),
            open_mode: "auto".to_string(),
            tmux_session: "hostmux".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            hidden_hosts: Vec::new(),
            defaults: Defaults::default(),
            hosts: Vec::new(),
            groups: Vec::new(),
        }
    }
}
