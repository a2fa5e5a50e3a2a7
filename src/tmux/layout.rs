//! Pane display policy: split direction, layout, sync, borders.

use crate::config::{Defaults, Group, DEFAULT_PANE_BORDER_FORMAT};

/// Resolved pane display options for one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneSettings {
    /// `-h` or `-v`, passed to `split-window`.
    pub split_flag: &'static str,
    pub layout: String,
    pub sync_panes: bool,
    pub border_format: String,
    /// off | top | bottom
    pub border_status: String,
}

/// Group value when set, else the defaults' value; trimmed.
fn pick<'a>(default: &'a str, group: Option<&'a str>) -> &'a str {
    group
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.trim())
}

fn split_flag(split: &str) -> &'static str {
    match split.to_lowercase().as_str() {
        "vertical" | "v" => "-v",
        _ => "-h",
    }
}

fn layout_name(layout: &str, pane_count: usize) -> String {
    match layout.to_lowercase().as_str() {
        "" | "auto" if pane_count >= 4 => "tiled".to_string(),
        "" | "auto" => "even-vertical".to_string(),
        "t" | "tiled" => "tiled".to_string(),
        "eh" | "even-horizontal" => "even-horizontal".to_string(),
        "ev" | "even-vertical" => "even-vertical".to_string(),
        "mh" | "main-horizontal" => "main-horizontal".to_string(),
        "mv" | "main-vertical" => "main-vertical".to_string(),
        _ => layout.to_string(),
    }
}

fn sync_enabled(sync: &str) -> bool {
    !matches!(sync.to_lowercase().as_str(), "off" | "false" | "0" | "no")
}

/// Merge defaults and an optional group into [`PaneSettings`].
pub fn resolve_pane_settings(
    defaults: &Defaults,
    group: Option<&Group>,
    pane_count: usize,
) -> PaneSettings {
    let split = pick(&defaults.pane_split, group.map(|g| g.pane_split.as_str()));
    let layout = pick(&defaults.pane_layout, group.map(|g| g.pane_layout.as_str()));
    let sync = pick(&defaults.pane_sync, group.map(|g| g.pane_sync.as_str()));
    let border_format = pick(
        &defaults.pane_border_format,
        group.map(|g| g.pane_border_format.as_str()),
    );
    let border_status = pick(
        &defaults.pane_border_status,
        group.map(|g| g.pane_border_status.as_str()),
    );

    PaneSettings {
        split_flag: split_flag(split),
        layout: layout_name(layout, pane_count),
        sync_panes: sync_enabled(sync),
        border_format: if border_format.is_empty() {
            DEFAULT_PANE_BORDER_FORMAT.to_string()
        } else {
            border_format.to_string()
        },
        border_status: if border_status.is_empty() {
            "bottom".to_string()
        } else {
            border_status.to_lowercase()
        },
    }
}
