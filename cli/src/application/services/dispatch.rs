//! Application service: per-host command dispatch use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use crate::application::ports::{ActionReporter, RemoteExecutor};
use crate::domain::{ApplicationSet, CommandKind, remote_command};

/// Run `kind` for the selected applications on every host, strictly in
/// sequence.
///
/// Hosts are visited in the order given. Per host, the command's actions run
/// in their fixed composition order, and within each action the member
/// services run agora-first. Failures are reported and never abort the run:
/// a host that is down still gets every remaining step attempted, and later
/// hosts are unaffected.
pub async fn dispatch(
    kind: CommandKind,
    apps: ApplicationSet,
    hosts: &[&str],
    executor: &impl RemoteExecutor,
    reporter: &impl ActionReporter,
) {
    for &host in hosts {
        reporter.host_started(host);
        for &action in kind.actions() {
            for service in apps.services() {
                let Some(command) = remote_command(service, action) else {
                    continue;
                };
                run_action(host, command, executor, reporter).await;
            }
        }
    }
}

/// Run one remote command and report its outcome.
async fn run_action(
    host: &str,
    command: &str,
    executor: &impl RemoteExecutor,
    reporter: &impl ActionReporter,
) {
    match executor.execute(host, command).await {
        Ok(outcome) if outcome.success() => {
            reporter.action_succeeded(host, command, &outcome.output);
        }
        Ok(outcome) => {
            let detail = if outcome.output.is_empty() {
                format!("exit code {}", outcome.exit_code)
            } else {
                format!("exit code {}\n{}", outcome.exit_code, outcome.output)
            };
            reporter.action_failed(host, command, &detail);
        }
        Err(err) => {
            reporter.action_failed(host, command, &format!("{err:#}"));
        }
    }
}
