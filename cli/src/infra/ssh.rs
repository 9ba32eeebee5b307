//! Infrastructure implementations of the `RemoteExecutor` port.
//!
//! `SshExecutor<R>` routes every remote action through one `ssh` invocation.
//! `DryRunExecutor` is the `--dry-run` stand-in that never touches the
//! network.

use anyhow::{Context, Result};

use crate::application::ports::{RemoteExecutor, RemoteOutput};
use crate::infra::command_runner::{CommandRunner, TokioCommandRunner};

/// Infrastructure adapter that runs each remote command as `ssh <host> <cmd>`.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct SshExecutor<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> SshExecutor<R> {
    /// Create a new executor with an explicit runner instance.
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl SshExecutor<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner() -> Self {
        Self {
            runner: TokioCommandRunner,
        }
    }
}

impl<R: CommandRunner> RemoteExecutor for SshExecutor<R> {
    async fn execute(&self, host: &str, command: &str) -> Result<RemoteOutput> {
        let output = self
            .runner
            .run("ssh", &[host, command])
            .await
            .with_context(|| format!("ssh {host}"))?;

        Ok(RemoteOutput {
            exit_code: output.status.code().unwrap_or(-1),
            output: combine_streams(&output.stdout, &output.stderr),
        })
    }
}

/// Merge captured stdout and stderr into one display string, stdout first,
/// with trailing newlines trimmed so the reporter controls spacing.
fn combine_streams(stdout: &[u8], stderr: &[u8]) -> String {
    let out = String::from_utf8_lossy(stdout);
    let err = String::from_utf8_lossy(stderr);
    let out = out.trim_end();
    let err = err.trim_end();

    match (out.is_empty(), err.is_empty()) {
        (false, false) => format!("{out}\n{err}"),
        (false, true) => out.to_string(),
        (true, _) => err.to_string(),
    }
}

/// `RemoteExecutor` that executes nothing: each call succeeds and reports the
/// `ssh` invocation it would have made as its output.
pub struct DryRunExecutor;

impl RemoteExecutor for DryRunExecutor {
    async fn execute(&self, host: &str, command: &str) -> Result<RemoteOutput> {
        Ok(RemoteOutput {
            exit_code: 0,
            output: format!("ssh {host} {command}"),
        })
    }
}
