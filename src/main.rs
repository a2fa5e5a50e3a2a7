use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use hostmux::config::Config;
use hostmux::connect::{ConnectOptions, Connector};
use hostmux::dispatch::DispatchOutcome;
use hostmux::tmux::SystemTmux;

#[derive(Parser, Debug)]
#[command(
    name = "hostmux",
    version,
    about = "Open SSH sessions to one or many hosts, optionally multiplexed in tmux"
)]
struct Cli {
    /// Path to config.toml (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable tmux integration; connect in the current terminal
    #[arg(long, global = true)]
    no_tmux: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Connect to a host or a group
    #[command(visible_alias = "c")]
    Connect {
        #[command(subcommand)]
        target: ConnectTarget,
    },
    /// Print configured hosts or groups
    #[command(visible_alias = "l")]
    List {
        #[command(subcommand)]
        target: ListTarget,
    },
}

#[derive(Subcommand, Debug)]
enum ConnectTarget {
    /// Connect to a single host address
    #[command(visible_alias = "h")]
    Host { name: String },
    /// Connect to every host in a group
    #[command(visible_alias = "g")]
    Group {
        name: String,
        /// Run this command on each host instead of the group's remote_command
        #[arg(long, value_name = "CMD")]
        command: Option<String>,
        /// Stay in a login shell after the remote command exits
        #[arg(long)]
        keep_open: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ListTarget {
    /// Hosts mentioned in the config (hidden hosts excluded)
    #[command(visible_alias = "h")]
    Hosts {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configured groups
    #[command(visible_alias = "g")]
    Groups {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct GroupJson<'a> {
    name: &'a str,
    hosts: &'a [String],
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;

    match cli.command {
        Command::Connect { target } => connect(&config, cli.no_tmux, target),
        Command::List { target } => list(&config, target),
    }
}

fn connect(config: &Config, no_tmux: bool, target: ConnectTarget) -> Result<()> {
    let mut options = ConnectOptions::from_env(no_tmux);
    let mut runner = SystemTmux;

    let outcome = match target {
        ConnectTarget::Host { name } => {
            Connector::new(config, options).connect_host(&mut runner, &name)?
        }
        ConnectTarget::Group {
            name,
            command,
            keep_open,
        } => {
            let Some(group) = config.group(&name) else {
                bail!("group '{}' not found", name);
            };
            if group.hosts.is_empty() {
                bail!("group '{}' has no hosts", group.name);
            }
            options.remote_command = command;
            options.keep_open = keep_open;
            Connector::new(config, options).connect_group(&mut runner, group, None)?
        }
    };

    match outcome {
        DispatchOutcome::Exec(request) => Err(request.exec().into()),
        DispatchOutcome::Opened { summary, .. } => {
            eprintln!("{summary}");
            Ok(())
        }
    }
}

fn list(config: &Config, target: ListTarget) -> Result<()> {
    match target {
        ListTarget::Hosts { json } => {
            let hosts = config.known_hosts();
            if json {
                println!("{}", serde_json::to_string_pretty(&hosts)?);
            } else {
                for host in hosts {
                    println!("{host}");
                }
            }
        }
        ListTarget::Groups { json } => {
            if json {
                let groups: Vec<GroupJson<'_>> = config
                    .groups
                    .iter()
                    .map(|g| GroupJson {
                        name: &g.name,
                        hosts: &g.hosts,
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                for group in &config.groups {
                    println!("{} ({} hosts)", group.name, group.hosts.len());
                }
            }
        }
    }
    Ok(())
}
