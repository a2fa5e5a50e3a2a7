//! Connect pipeline: resolve → compile → resolve mode → dispatch.
//!
//! [`Connector`] holds no mutable state; every call recomputes settings
//! from the (read-only) config.

use crate::config::{Config, Group};
use crate::dispatch::{dispatch, DispatchOutcome, DispatchRequest};
use crate::error::ConnectError;
use crate::ssh;
use crate::tmux::{in_tmux, resolve_open_mode, resolve_pane_settings, OpenMode, TmuxRunner};

/// Per-invocation knobs supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    /// Force `tmux = never` regardless of config.
    pub no_tmux: bool,
    /// Whether the caller runs inside tmux.
    pub in_multiplexer: bool,
    /// Ad hoc remote command ("connect and run this once").
    pub remote_command: Option<String>,
    /// Keep the login shell open after the remote command.
    pub keep_open: bool,
}

impl ConnectOptions {
    /// Options with `in_multiplexer` taken from the environment.
    pub fn from_env(no_tmux: bool) -> Self {
        Self {
            no_tmux,
            in_multiplexer: in_tmux(),
            ..Self::default()
        }
    }
}

/// Group value when non-blank, else the default.
fn pick<'s>(default: &'s str, over: Option<&'s str>) -> &'s str {
    over.filter(|v| !v.trim().is_empty()).unwrap_or(default)
}

pub struct Connector<'a> {
    config: &'a Config,
    options: ConnectOptions,
}

impl<'a> Connector<'a> {
    pub fn new(config: &'a Config, options: ConnectOptions) -> Self {
        Self { config, options }
    }

    /// Compile one ssh argv per host.
    ///
    /// Precedence per host: defaults → host override → group → per-call
    /// remote command.
    pub fn commands(
        &self,
        hosts: &[String],
        group: Option<&Group>,
    ) -> Result<Vec<Vec<String>>, ConnectError> {
        hosts
            .iter()
            .map(|host| {
                let mut settings =
                    ssh::resolve(&self.config.defaults, self.config.host_override(host), group);
                if let Some(command) = &self.options.remote_command {
                    settings = settings.with_remote_command(command);
                }
                if self.options.keep_open {
                    settings = settings.keep_open();
                }
                ssh::compile(host, &settings)
            })
            .collect()
    }

    /// Open mode after group policy and `no_tmux` are applied.
    pub fn open_mode(&self, group: Option<&Group>) -> OpenMode {
        let defaults = &self.config.defaults;
        let mut tmux = pick(&defaults.tmux, group.map(|g| g.tmux.as_str()));
        let open_mode = pick(&defaults.open_mode, group.map(|g| g.open_mode.as_str()));
        if self.options.no_tmux {
            tmux = "never";
        }
        resolve_open_mode(tmux, open_mode, self.options.in_multiplexer)
    }

    /// Connect a single host using defaults and its override.
    pub fn connect_host<R: TmuxRunner + ?Sized>(
        &self,
        runner: &mut R,
        host: &str,
    ) -> Result<DispatchOutcome, ConnectError> {
        self.connect_hosts(runner, &[host.to_string()])
    }

    /// Connect an ad hoc selection of hosts (no group).
    pub fn connect_hosts<R: TmuxRunner + ?Sized>(
        &self,
        runner: &mut R,
        hosts: &[String],
    ) -> Result<DispatchOutcome, ConnectError> {
        self.run(runner, hosts, None)
    }

    /// Connect `hosts` (or every member when `None`) under `group`'s policy.
    pub fn connect_group<R: TmuxRunner + ?Sized>(
        &self,
        runner: &mut R,
        group: &Group,
        hosts: Option<&[String]>,
    ) -> Result<DispatchOutcome, ConnectError> {
        let hosts = hosts.unwrap_or(&group.hosts);
        self.run(runner, hosts, Some(group))
    }

    fn run<R: TmuxRunner + ?Sized>(
        &self,
        runner: &mut R,
        hosts: &[String],
        group: Option<&Group>,
    ) -> Result<DispatchOutcome, ConnectError> {
        if hosts.is_empty() {
            return Err(ConnectError::NoHostsSelected);
        }

        let commands = self.commands(hosts, group)?;
        let mode = self.open_mode(group);
        let pane = resolve_pane_settings(&self.config.defaults, group, commands.len());
        tracing::debug!(
            hosts = hosts.len(),
            %mode,
            in_tmux = self.options.in_multiplexer,
            group = group.map(|g| g.name.as_str()),
            "Dispatching"
        );

        dispatch(
            runner,
            &DispatchRequest {
                hosts,
                commands: &commands,
                mode,
                in_multiplexer: self.options.in_multiplexer,
                pane: &pane,
                group: group.map(|g| g.name.as_str()),
                session: &self.config.defaults.tmux_session,
            },
        )
    }
}
