//! Read-only queries over a loaded [`Config`].

use std::collections::BTreeSet;

use crate::config::types::{Config, Group, HostOverride};
use crate::ssh::parse_bracket_host;

impl Config {
    /// Returns the override for `host`.
    ///
    /// Exact (trimmed) address match first. A known_hosts style
    /// `[host]:port` address with no exact entry falls back to the entry
    /// for the bare `host`.
    pub fn host_override(&self, host: &str) -> Option<&HostOverride> {
        let host = host.trim();
        if host.is_empty() {
            return None;
        }

        if let Some(found) = self.hosts.iter().find(|h| h.host.trim() == host) {
            return Some(found);
        }

        let (base, _) = parse_bracket_host(host)?;
        let base = base.trim();
        self.hosts.iter().find(|h| h.host.trim() == base)
    }

    /// Returns the group named `name`, compared case-insensitively.
    pub fn group(&self, name: &str) -> Option<&Group> {
        let name = name.trim();
        self.groups.iter().find(|g| g.name.eq_ignore_ascii_case(name))
    }

    /// Whether `host` is hidden, either by `hidden_hosts` or its override.
    pub fn is_hidden(&self, host: &str) -> bool {
        let host = host.trim();
        if self.hidden_hosts.iter().any(|h| h.trim() == host) {
            return true;
        }
        self.host_override(host).is_some_and(|h| h.hidden)
    }

    /// Sorted, de-duplicated set of every host the config mentions
    /// (overrides and group members), hidden hosts excluded.
    pub fn known_hosts(&self) -> Vec<String> {
        let overrides = self.hosts.iter().map(|h| h.host.as_str());
        let members = self.groups.iter().flat_map(|g| g.hosts.iter().map(String::as_str));

        overrides
            .chain(members)
            .map(str::trim)
            .filter(|h| !h.is_empty() && !self.is_hidden(h))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
