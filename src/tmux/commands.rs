//! argv builders for tmux invocations that carry an ssh command.

/// Program name at argv[0] of every tmux command.
pub const TMUX_PROGRAM: &str = "tmux";

const DEFAULT_SESSION: &str = "hostmux";

pub(crate) fn with_command(mut head: Vec<String>, ssh: &[String]) -> Vec<String> {
    head.push("--".into());
    head.extend(ssh.iter().cloned());
    head
}

/// `tmux new-window -n NAME -- <ssh...>`
pub fn new_window_cmd(name: &str, ssh: &[String]) -> Vec<String> {
    let name = match name.trim() {
        "" => "ssh",
        n => n,
    };
    with_command(
        vec![TMUX_PROGRAM.into(), "new-window".into(), "-n".into(), name.into()],
        ssh,
    )
}

/// `tmux new-session -A -s SESSION -- <ssh...>`
///
/// `-A` attaches when the session already exists, so repeated connects
/// land in one session.
pub fn new_session_cmd(session: &str, ssh: &[String]) -> Vec<String> {
    let session = match session.trim() {
        "" => DEFAULT_SESSION,
        s => s,
    };
    with_command(
        vec![
            TMUX_PROGRAM.into(),
            "new-session".into(),
            "-A".into(),
            "-s".into(),
            session.into(),
        ],
        ssh,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ssh() -> Vec<String> {
        ["ssh", "-p", "2222", "host"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builders() {
        assert_eq!(
            new_window_cmd("h", &ssh()),
            vec!["tmux", "new-window", "-n", "h", "--", "ssh", "-p", "2222", "host"]
        );
        assert_eq!(
            new_session_cmd("sess", &ssh()),
            vec!["tmux", "new-session", "-A", "-s", "sess", "--", "ssh", "-p", "2222", "host"]
        );
    }

    #[test]
    fn blank_names_fall_back() {
        assert_eq!(new_window_cmd(" ", &ssh())[3], "ssh");
        assert_eq!(new_session_cmd("", &ssh())[4], "hostmux");
    }
}
