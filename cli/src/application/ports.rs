//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure and presentation
//! must fulfill. This file imports only from `crate::domain`, never from
//! `crate::infra` or `crate::output`.

use anyhow::Result;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Outcome of one remote command on one host: the remote exit code plus the
/// captured output (stdout and stderr combined, in that order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOutput {
    /// Exit code reported by the remote shell. `-1` when the local transport
    /// process was killed by a signal and reported no code.
    pub exit_code: i32,
    /// Captured output, already decoded lossily to UTF-8.
    pub output: String,
}

impl RemoteOutput {
    /// Whether the remote command exited cleanly.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

// ── Remote Execution Port ─────────────────────────────────────────────────────

/// Abstracts the transport that runs one shell command on one host, so the
/// dispatcher can be tested without network access and `--dry-run` can swap
/// the transport out entirely.
#[allow(async_fn_in_trait)]
pub trait RemoteExecutor {
    /// Run `command` on `host` and capture its outcome.
    ///
    /// A non-zero remote exit is NOT an error; it comes back as a
    /// [`RemoteOutput`] carrying that exit code.
    ///
    /// # Errors
    ///
    /// Returns an error only when the transport itself fails, e.g. the local
    /// `ssh` binary cannot be spawned.
    async fn execute(&self, host: &str, command: &str) -> Result<RemoteOutput>;
}

// ── Action Reporting Port ─────────────────────────────────────────────────────

/// Abstracts per-action reporting so the dispatcher can emit events without
/// depending on the Presentation layer. Sync trait, no async needed.
pub trait ActionReporter {
    /// Announce the host about to be dispatched.
    fn host_started(&self, host: &str);
    /// Report a completed action and its captured output.
    fn action_succeeded(&self, host: &str, command: &str, output: &str);
    /// Report a failed action. Dispatch continues with the next action.
    fn action_failed(&self, host: &str, command: &str, detail: &str);
}
