use std::process::Command;

use crate::ui;

/// Host platform, threaded into resolver invocation so that
/// platform-conditional command selection stays testable without
/// touching the process environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Runs a composed command string through the platform shell with
/// inherited stdio, framed by a `Running:` line and blank lines.
///
/// A non-zero exit status or spawn error is discarded: the child has
/// already written its own diagnostics to stderr, and the surrounding
/// output framing must stay identical either way.
pub fn run_command(cmd: &str) {
    ui::print_running(cmd);
    println!();
    let _ = shell_status(cmd);
    println!();
}

/// Forwards unrecognized input verbatim to the real tool binary.
pub fn passthrough(binary: &str, input: &str) {
    let full = format!("{} {}", binary, input);
    ui::print_running(&full);
    let _ = shell_status(&full);
}

// Several resolvers emit shell constructs ($(...), pipes, redirects,
// heredocs), so commands go through a shell interpreter rather than a
// literal argv vector.
fn shell_status(cmd: &str) -> std::io::Result<std::process::ExitStatus> {
    match Platform::current() {
        Platform::Unix => Command::new("sh").arg("-c").arg(cmd).status(),
        Platform::Windows => Command::new("cmd").args(["/C", cmd]).status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_exit_status_is_reported_not_raised() {
        let status = shell_status("exit 3").unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn failing_command_returns_normally() {
        run_command("exit 3");
        run_command("this-binary-does-not-exist-anywhere 2>/dev/null");
    }

    #[test]
    fn passthrough_of_unknown_binary_returns_normally() {
        passthrough("this-binary-does-not-exist-anywhere", "status 2>/dev/null");
    }

    #[test]
    fn shell_constructs_are_interpreted() {
        let status = shell_status("true && exit $(echo 7)").unwrap();
        assert_eq!(status.code(), Some(7));
    }
}
