//! End-to-end connect flows: config → settings → argv → mode → dispatch.

mod common;

use common::{strings, temp_config, FakeTmux, SAMPLE_CONFIG};
use hostmux::config::Config;
use hostmux::connect::{ConnectOptions, Connector};
use hostmux::dispatch::DispatchOutcome;
use hostmux::tmux::OpenMode;
use hostmux::ConnectError;

fn sample() -> Config {
    let (_dir, path) = temp_config(SAMPLE_CONFIG);
    Config::load_from(&path).expect("sample config should load")
}

fn inside_tmux() -> ConnectOptions {
    ConnectOptions {
        in_multiplexer: true,
        ..ConnectOptions::default()
    }
}

#[test]
fn host_connect_outside_tmux_execs_ssh_directly() {
    let config = sample();
    let connector = Connector::new(&config, ConnectOptions::default());
    let mut tmux = FakeTmux::new();

    let outcome = connector.connect_host(&mut tmux, "db01").unwrap();
    let DispatchOutcome::Exec(exec) = outcome else {
        panic!("Expected Exec outcome");
    };
    assert_eq!(
        exec.argv(),
        strings(&["ssh", "-p", "2222", "-o", "ServerAliveInterval=30", "dba@db01"])
    );
    assert!(tmux.calls.is_empty());
}

#[test]
fn group_overrides_host_user_but_keeps_host_port() {
    let config = sample();
    let group = config.group("PROD").unwrap();
    let connector = Connector::new(&config, ConnectOptions::default());

    let commands = connector.commands(&group.hosts, Some(group)).unwrap();
    assert_eq!(
        commands[2],
        strings(&[
            "ssh",
            "-i",
            "~/.ssh/prod",
            "-p",
            "2222",
            "-o",
            "ServerAliveInterval=30",
            "root@db01"
        ])
    );
    assert_eq!(commands[0].last().unwrap(), "root@web01");
}

#[test]
fn group_outside_tmux_multi_host_is_rejected() {
    let config = sample();
    let group = config.group("prod").unwrap();
    let connector = Connector::new(&config, ConnectOptions::default());
    let mut tmux = FakeTmux::new();

    assert_eq!(connector.open_mode(Some(group)), OpenMode::Current);
    assert!(matches!(
        connector.connect_group(&mut tmux, group, None),
        Err(ConnectError::MultiHostRequiresMultiplexer)
    ));
    assert!(tmux.calls.is_empty());
}

#[test]
fn group_inside_tmux_opens_panes_in_group_window() {
    let config = sample();
    let group = config.group("prod").unwrap();
    let connector = Connector::new(&config, inside_tmux());
    let mut tmux = FakeTmux::new();

    let outcome = connector.connect_group(&mut tmux, group, None).unwrap();
    assert!(matches!(outcome, DispatchOutcome::Opened { count: 3, .. }));

    assert_eq!(tmux.calls[0][5], "prod");
    let splits = tmux.calls_to("split-window");
    assert_eq!(splits.len(), 2);
    assert_eq!(splits[0][3], "-h");
    assert_eq!(tmux.calls.last().unwrap()[3], "even-vertical");
}

#[test]
fn group_subset_selection() {
    let config = sample();
    let group = config.group("prod").unwrap();
    let connector = Connector::new(&config, inside_tmux());
    let mut tmux = FakeTmux::new();

    let subset = strings(&["web02"]);
    let outcome = connector
        .connect_group(&mut tmux, group, Some(&subset))
        .unwrap();
    assert_eq!(
        outcome,
        DispatchOutcome::Opened {
            count: 1,
            summary: "opened 1".to_string()
        }
    );
    assert_eq!(
        tmux.calls[0],
        strings(&[
            "new-window",
            "-n",
            "prod",
            "--",
            "ssh",
            "-i",
            "~/.ssh/prod",
            "-o",
            "ServerAliveInterval=30",
            "root@web02"
        ])
    );
}

#[test]
fn group_remote_command_and_pane_policy() {
    let mut config = sample();
    config.defaults.open_mode = "tmux-pane".into();
    let group = config.group("logs").unwrap().clone();
    let connector = Connector::new(&config, inside_tmux());
    let mut tmux = FakeTmux::new();

    connector.connect_group(&mut tmux, &group, None).unwrap();

    let new_window = &tmux.calls[0];
    assert_eq!(new_window[5], "logs");
    assert_eq!(
        new_window[7..],
        strings(&[
            "ssh",
            "-p",
            "2201",
            "-o",
            "ServerAliveInterval=30",
            "ops@10.0.0.5",
            "sh -c 'tail -f /var/log/syslog'"
        ])
    );
    let options = tmux.window_options();
    assert!(options.contains(&("pane-border-status".to_string(), "off".to_string())));
    assert!(!options.iter().any(|(k, _)| k == "synchronize-panes"));
}

#[test]
fn per_call_command_beats_group_command() {
    let config = sample();
    let group = config.group("logs").unwrap();
    let options = ConnectOptions {
        remote_command: Some("journalctl -f".into()),
        ..ConnectOptions::default()
    };
    let connector = Connector::new(&config, options);

    let commands = connector.commands(&group.hosts, Some(group)).unwrap();
    assert_eq!(commands[0].last().unwrap(), "sh -c 'journalctl -f'");
}

#[test]
fn no_tmux_forces_current_even_inside_tmux() {
    let config = sample();
    let options = ConnectOptions {
        no_tmux: true,
        in_multiplexer: true,
        ..ConnectOptions::default()
    };
    let connector = Connector::new(&config, options);
    let mut tmux = FakeTmux::new();

    let outcome = connector.connect_host(&mut tmux, "web01").unwrap();
    assert!(matches!(outcome, DispatchOutcome::Exec(_)));
    assert!(tmux.calls.is_empty());
}

#[test]
fn ad_hoc_selection_names_window_after_first_host() {
    let config = sample();
    let connector = Connector::new(&config, inside_tmux());
    let mut tmux = FakeTmux::new();

    let hosts = strings(&["[10.0.0.9]:2200", "web01"]);
    connector.connect_hosts(&mut tmux, &hosts).unwrap();
    assert_eq!(tmux.calls[0][5], "10.0.0.9_2200");
}

#[test]
fn empty_selection_is_no_hosts() {
    let config = sample();
    let connector = Connector::new(&config, inside_tmux());
    assert!(matches!(
        connector.connect_hosts(&mut FakeTmux::new(), &[]),
        Err(ConnectError::NoHostsSelected)
    ));
}
