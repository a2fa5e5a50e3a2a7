//! Multiplex dispatcher.
//!
//! Decides, in fixed order, between replacing the process with ssh,
//! attaching a tmux session around ssh, one window of panes, or one
//! window per host; then drives tmux to realise that decision.

use crate::error::ConnectError;
use crate::exec::ExecRequest;
use crate::tmux::{
    group_window_name, new_session_cmd, open_one_window, open_windows, OneWindowOpts, OpenMode,
    PaneSettings, TmuxRunner,
};

/// Everything one dispatch needs. `hosts[i]` labels `commands[i]`.
#[derive(Debug, Clone)]
pub struct DispatchRequest<'a> {
    pub hosts: &'a [String],
    pub commands: &'a [Vec<String>],
    pub mode: OpenMode,
    pub in_multiplexer: bool,
    pub pane: &'a PaneSettings,
    /// Group name used for window naming, when connecting a group.
    pub group: Option<&'a str>,
    /// Session for `new-session -A` when not already inside tmux.
    pub session: &'a str,
}

/// What a successful dispatch leaves for the caller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Replace the current process with this argv; must be the caller's
    /// last action.
    Exec(ExecRequest),
    /// tmux windows or panes were opened.
    Opened { count: usize, summary: String },
}

impl DispatchOutcome {
    fn opened(count: usize, summary: String) -> Self {
        DispatchOutcome::Opened { count, summary }
    }
}

/// Run the dispatch state machine.
///
/// `Current` and not-in-tmux paths never touch the runner.
pub fn dispatch<R: TmuxRunner + ?Sized>(
    runner: &mut R,
    req: &DispatchRequest<'_>,
) -> Result<DispatchOutcome, ConnectError> {
    let Some(first) = req.commands.first() else {
        return Err(ConnectError::NoHostsSelected);
    };
    let count = req.commands.len();

    if req.mode == OpenMode::Current {
        if count > 1 {
            return Err(ConnectError::MultiHostRequiresMultiplexer);
        }
        return Ok(DispatchOutcome::Exec(ExecRequest::new(first.clone())));
    }

    if !req.in_multiplexer {
        if count > 1 {
            return Err(ConnectError::MultiHostRequiresSession);
        }
        return Ok(DispatchOutcome::Exec(ExecRequest::new(new_session_cmd(
            req.session,
            first,
        ))));
    }

    if req.mode == OpenMode::Pane || count > 1 {
        let window_name = group_window_name(req.hosts, req.group);
        let opened = open_one_window(
            runner,
            req.commands,
            &OneWindowOpts {
                window_name: &window_name,
                pane_titles: req.hosts,
                pane: req.pane,
            },
        )?;
        tracing::info!(panes = opened, window = %window_name, "Opened tmux panes");
        return Ok(DispatchOutcome::opened(
            opened,
            format!("opened {opened} in one window"),
        ));
    }

    let names: Vec<String> = (0..count)
        .map(|i| {
            let label = req.hosts.get(i..=i).unwrap_or_default();
            group_window_name(label, req.group)
        })
        .collect();
    let opened = open_windows(runner, req.commands, &names)?;
    tracing::info!(windows = opened, "Opened tmux windows");
    Ok(DispatchOutcome::opened(opened, format!("opened {opened}")))
}
