//! Local process execution for infrastructure adapters.
//!
//! `CommandRunner` abstracts process spawning so the ssh transport can be
//! tested without a real `ssh` binary. `TokioCommandRunner` is the
//! production implementation.

use std::process::{Output, Stdio};

use anyhow::{Context, Result};

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

/// Production `CommandRunner` backed by tokio process execution.
///
/// No timeout is applied: a remote command owns the terminal until it exits.
/// Stdin is `/dev/null`, so a remote prompt fails instead of blocking, and
/// `kill_on_drop` reaps the child if the run is abandoned mid-flight.
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to spawn {program}"))
    }
}
