//! `TerminalReporter`: Presentation-layer implementation of `ActionReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ActionReporter`
//! trait so the dispatcher can emit events without depending on any
//! presentation type directly.

use crate::application::ports::ActionReporter;
use crate::output::OutputContext;

/// Terminal action reporter that wraps an `OutputContext`.
///
/// - `host_started()` prints the host name as a section header
/// - `action_succeeded()` echoes the command and its captured output
/// - `action_failed()` prints the failure to stderr (never suppressed)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ActionReporter for TerminalReporter<'_> {
    fn host_started(&self, host: &str) {
        self.ctx.header(host);
    }

    fn action_succeeded(&self, _host: &str, command: &str, output: &str) {
        self.ctx.command(command);
        for line in output.lines() {
            self.ctx.output_line(line);
        }
    }

    fn action_failed(&self, host: &str, command: &str, detail: &str) {
        self.ctx.error(&format!("{host}: `{command}` failed"));
        for line in detail.lines() {
            self.ctx.error_detail(line);
        }
    }
}
