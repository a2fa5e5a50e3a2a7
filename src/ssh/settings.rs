//! Settings resolver — Defaults → HostOverride → Group.

use crate::config::{Defaults, Group, HostOverride};

/// Effective connection parameters for one host in one connect attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub user: String,
    /// 0 means "use 22, omit from argv".
    pub port: u32,
    pub identity_file: String,
    pub extra_args: Vec<String>,
    /// Only ever set by a group or an explicit per-call override.
    pub remote_command: String,
}

fn is_set(value: &str) -> bool {
    !value.trim().is_empty()
}

impl Settings {
    /// Baseline from defaults; `remote_command` starts empty.
    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self {
            user: defaults.user.clone(),
            port: defaults.port,
            identity_file: defaults.identity_file.clone(),
            extra_args: defaults.extra_args.clone(),
            remote_command: String::new(),
        }
    }

    /// Overwrite every field the host override sets.
    pub fn with_host(mut self, host: &HostOverride) -> Self {
        if is_set(&host.user) {
            self.user = host.user.clone();
        }
        if host.port != 0 {
            self.port = host.port;
        }
        if is_set(&host.identity_file) {
            self.identity_file = host.identity_file.clone();
        }
        if !host.extra_args.is_empty() {
            self.extra_args = host.extra_args.clone();
        }
        self
    }

    /// Overwrite every field the group sets. Applied after the host step,
    /// so a set group field beats a set host field.
    pub fn with_group(mut self, group: &Group) -> Self {
        if is_set(&group.user) {
            self.user = group.user.clone();
        }
        if group.port != 0 {
            self.port = group.port;
        }
        if is_set(&group.identity_file) {
            self.identity_file = group.identity_file.clone();
        }
        if !group.extra_args.is_empty() {
            self.extra_args = group.extra_args.clone();
        }
        if is_set(&group.remote_command) {
            self.remote_command = group.remote_command.clone();
        }
        self
    }

    /// One-off "connect and run this" override; blank leaves the value alone.
    pub fn with_remote_command(mut self, command: &str) -> Self {
        let command = command.trim();
        if !command.is_empty() {
            self.remote_command = command.to_string();
        }
        self
    }
}

/// Resolve the effective settings for one host.
///
/// Total over every input combination.
pub fn resolve(
    defaults: &Defaults,
    host: Option<&HostOverride>,
    group: Option<&Group>,
) -> Settings {
    let mut settings = Settings::from_defaults(defaults);
    if let Some(host) = host {
        settings = settings.with_host(host);
    }
    if let Some(group) = group {
        settings = settings.with_group(group);
    }
    settings
}
