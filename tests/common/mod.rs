//! Shared utilities for process-level tests.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStdout, Command};

/// Upper bound for anything that is expected to happen promptly.
pub const PROMPT: Duration = Duration::from_secs(5);

/// Window in which a waiting process must stay silent.
pub const QUIET: Duration = Duration::from_millis(500);

/// A running `indefinite-wait` binary with its stdout attached.
pub struct Spawned {
    pub child: Child,
    pub stdout: Lines<BufReader<ChildStdout>>,
}

/// Start the binary with the given stdout and default logging.
pub fn spawn_with_stdout(stdout: Stdio) -> Child {
    Command::new(env!("CARGO_BIN_EXE_indefinite-wait"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(stdout)
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .expect("failed to spawn indefinite-wait")
}

/// Start the binary with piped stdout and default logging.
pub fn spawn_waiter() -> Spawned {
    let mut child = spawn_with_stdout(Stdio::piped());

    let stdout = child.stdout.take().expect("stdout is piped");
    Spawned {
        child,
        stdout: BufReader::new(stdout).lines(),
    }
}

impl Spawned {
    /// Read the next stdout line, failing the test if it takes too long.
    pub async fn next_line(&mut self) -> Option<String> {
        tokio::time::timeout(PROMPT, self.stdout.next_line())
            .await
            .expect("timed out waiting for output")
            .expect("failed to read stdout")
    }

    /// Deliver a signal by name (e.g. "INT", "TERM") through `kill(1)`.
    pub fn send_signal(&self, name: &str) {
        send_signal(&self.child, name);
    }
}

/// Deliver a signal by name to `child` through `kill(1)`.
pub fn send_signal(child: &Child, name: &str) {
    let pid = child.id().expect("process already reaped");
    let status = std::process::Command::new("kill")
        .arg(format!("-{}", name))
        .arg(pid.to_string())
        .status()
        .expect("failed to run kill");
    assert!(status.success(), "kill -{} {} failed", name, pid);
}
