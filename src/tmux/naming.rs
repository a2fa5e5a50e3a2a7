//! Window and pane naming.

const FALLBACK_NAME: &str = "ssh";
const MAX_NAME_CHARS: usize = 30;

/// Sanitized tmux window name for a host address.
///
/// `[10.0.0.1]:2222` → `10.0.0.1_2222`, capped at 30 characters.
pub fn window_name(host: &str) -> String {
    let host = host.trim();
    let host = host.strip_prefix('[').unwrap_or(host);
    let name: String = host
        .chars()
        .filter(|&c| c != ']')
        .map(|c| if c == ':' { '_' } else { c })
        .take(MAX_NAME_CHARS)
        .collect();
    if name.is_empty() {
        return FALLBACK_NAME.to_string();
    }
    name
}

/// Window name for a batch: the group name when non-blank, else the first
/// host's sanitized address, else `ssh`.
pub fn group_window_name(hosts: &[String], group: Option<&str>) -> String {
    if let Some(name) = group.map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    match hosts.first() {
        Some(host) => window_name(host),
        None => FALLBACK_NAME.to_string(),
    }
}
