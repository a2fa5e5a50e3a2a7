//! Window / pane creation protocol.
//!
//! Order matters: later steps target the window and pane ids returned by
//! earlier ones.

use crate::error::ConnectError;
use crate::tmux::commands::{new_window_cmd, with_command};
use crate::tmux::layout::PaneSettings;
use crate::tmux::runner::{argv, TmuxClient, TmuxRunner};

/// Options for [`open_one_window`].
#[derive(Debug, Clone)]
pub struct OneWindowOpts<'a> {
    pub window_name: &'a str,
    /// Pane titles in command order; missing or blank titles are skipped.
    pub pane_titles: &'a [String],
    pub pane: &'a PaneSettings,
}

fn pane_title(titles: &[String], idx: usize) -> Option<&str> {
    titles.get(idx).map(|t| t.trim()).filter(|t| !t.is_empty())
}

fn set_window_option<R: TmuxRunner + ?Sized>(
    client: &mut TmuxClient<'_, R>,
    win: &str,
    opt: &str,
    value: &str,
) {
    client.cosmetic(&argv(&["set-window-option", "-t", win, opt, value]));
}

fn set_pane_title<R: TmuxRunner + ?Sized>(
    client: &mut TmuxClient<'_, R>,
    pane: &str,
    title: Option<&str>,
) {
    if let Some(title) = title {
        client.cosmetic(&argv(&["select-pane", "-t", pane, "-T", title]));
    }
}

/// Open one new window split into one pane per command.
///
/// Window creation and every split are structural; options, titles and
/// the final layout are cosmetic. Returns the number of panes opened.
pub fn open_one_window<R: TmuxRunner + ?Sized>(
    runner: &mut R,
    commands: &[Vec<String>],
    opts: &OneWindowOpts<'_>,
) -> Result<usize, ConnectError> {
    let Some((first, rest)) = commands.split_first() else {
        return Err(ConnectError::NoHostsSelected);
    };
    let mut client = TmuxClient::new(runner);
    let name = match opts.window_name.trim() {
        "" => "ssh",
        n => n,
    };

    let out = client.structural(&with_command(
        argv(&["new-window", "-P", "-F", "#{window_id} #{pane_id}", "-n", name]),
        first,
    ))?;
    let mut ids = out.split_whitespace();
    let (Some(win), Some(first_pane)) = (ids.next(), ids.next()) else {
        return Err(ConnectError::MultiplexerCommandFailed {
            message: "missing window/pane id".to_string(),
            opened: 0,
        });
    };
    tracing::debug!(window = win, pane = first_pane, "Created tmux window");

    set_window_option(&mut client, win, "automatic-rename", "off");
    set_window_option(&mut client, win, "allow-rename", "off");
    if opts.pane.border_status.eq_ignore_ascii_case("off") {
        set_window_option(&mut client, win, "pane-border-status", "off");
    } else {
        set_window_option(&mut client, win, "pane-border-status", &opts.pane.border_status);
        set_window_option(&mut client, win, "pane-border-format", &opts.pane.border_format);
    }
    if opts.pane.sync_panes && commands.len() > 1 {
        set_window_option(&mut client, win, "synchronize-panes", "on");
    }

    set_pane_title(&mut client, first_pane, pane_title(opts.pane_titles, 0));

    for (i, command) in rest.iter().enumerate() {
        let idx = i + 1;
        let out = client
            .structural(&with_command(
                argv(&["split-window", "-t", win, opts.pane.split_flag, "-P", "-F", "#{pane_id}"]),
                command,
            ))
            .map_err(|e| e.with_opened(idx))?;
        if let Some(pane) = out.split_whitespace().next() {
            set_pane_title(&mut client, pane, pane_title(opts.pane_titles, idx));
        }
    }

    client.cosmetic(&argv(&["select-layout", "-t", win, &opts.pane.layout]));
    Ok(commands.len())
}

/// Open one window per command, named by `names[i]`.
///
/// Stops at the first failure; the error's `opened` counts the windows
/// created before it.
pub fn open_windows<R: TmuxRunner + ?Sized>(
    runner: &mut R,
    commands: &[Vec<String>],
    names: &[String],
) -> Result<usize, ConnectError> {
    let mut client = TmuxClient::new(runner);
    for (i, command) in commands.iter().enumerate() {
        let name = names.get(i).map(String::as_str).unwrap_or_default();
        let full = new_window_cmd(name, command);
        client.structural(&full[1..]).map_err(|e| e.with_opened(i))?;
    }
    Ok(commands.len())
}
