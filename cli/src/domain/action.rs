//! Fleet commands and the remote actions they expand to.

use crate::domain::service::Service;

// ── Commands ─────────────────────────────────────────────────────────────────

/// A top-level fleet command, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Report the container state of the selected services.
    Status,
    /// Restart the selected service containers.
    Restart,
    /// Pull the latest images, then restart.
    Update,
    /// Clear cached state, pull, then restart.
    Reset,
}

impl CommandKind {
    /// The actions a command performs on each host, in execution order.
    ///
    /// `update` and `reset` are compositions: every step runs on every host
    /// regardless of how the previous step fared.
    #[must_use]
    pub fn actions(self) -> &'static [Action] {
        match self {
            Self::Status => &[Action::Status],
            Self::Restart => &[Action::Restart],
            Self::Update => &[Action::Pull, Action::Restart],
            Self::Reset => &[Action::ClearCache, Action::Pull, Action::Restart],
        }
    }
}

// ── Remote actions ───────────────────────────────────────────────────────────

/// A single remote step performed against one service on one host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Status,
    Restart,
    Pull,
    ClearCache,
}

/// The shell command an action runs for a service, or `None` when the action
/// does not apply (stoa keeps no cache, so it has no clear-cache step).
#[must_use]
pub fn remote_command(service: Service, action: Action) -> Option<&'static str> {
    match (service, action) {
        (Service::Agora, Action::Status) => Some("docker ps --filter name=agora"),
        (Service::Agora, Action::Restart) => Some("docker restart agora"),
        (Service::Agora, Action::Pull) => Some("docker pull bosagora/agora:latest"),
        (Service::Agora, Action::ClearCache) => Some("rm -rf ~/agora/.cache"),
        (Service::Stoa, Action::Status) => Some("docker ps --filter name=stoa"),
        (Service::Stoa, Action::Restart) => Some("docker restart stoa"),
        (Service::Stoa, Action::Pull) => Some("docker pull bosagora/stoa:latest"),
        (Service::Stoa, Action::ClearCache) => None,
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
