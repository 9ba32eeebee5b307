//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::Parser;
use clap::builder::PossibleValue;

use crate::application::services::dispatch::dispatch;
use crate::domain::{ApplicationSet, CommandKind, default_targets, resolve_targets};
use crate::infra::ssh::{DryRunExecutor, SshExecutor};
use crate::output::OutputContext;
use crate::output::reporter::TerminalReporter;

/// Remote operations for the BOSAGORA validator hosts
#[derive(Parser)]
#[command(name = "fleet", version, arg_required_else_help = true)]
pub struct Cli {
    /// Operation to run on each target host
    #[arg(value_enum, ignore_case = true)]
    pub command: CommandKind,

    /// Application to act on: all, agora, or stoa
    pub app: String,

    /// Hosts, regions, or `all`; the whole fleet when omitted
    pub targets: Vec<String>,

    /// Print each ssh invocation instead of executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    // The NO_COLOR env var is honored in OutputContext::new, not here: wired
    // as a clap env, the var's value would be bool-parsed and the
    // conventional NO_COLOR=1 rejected as an invalid flag value.
    #[arg(long)]
    pub no_color: bool,
}

/// `CommandKind` lives in the domain layer and stays clap-free; the clap
/// binding is made here instead.
impl clap::ValueEnum for CommandKind {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Status, Self::Restart, Self::Update, Self::Reset]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Status => PossibleValue::new("status").help("Report container state"),
            Self::Restart => PossibleValue::new("restart").help("Restart service containers"),
            Self::Update => PossibleValue::new("update").help("Pull latest images, then restart"),
            Self::Reset => PossibleValue::new("reset").help("Clear caches, pull images, then restart"),
        })
    }
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error when the application or target tokens do not resolve.
    /// Remote failures are reported as they happen and are not errors here.
    pub async fn run(self) -> Result<()> {
        let Cli { command, app, targets, dry_run, quiet, no_color } = self;

        let apps = ApplicationSet::resolve(&app)?;
        let hosts: Vec<&str> = if targets.is_empty() {
            default_targets().to_vec()
        } else {
            resolve_targets(&targets)?
        };

        let ctx = OutputContext::new(no_color, quiet);
        let reporter = TerminalReporter::new(&ctx);

        if dry_run {
            dispatch(command, apps, &hosts, &DryRunExecutor, &reporter).await;
        } else {
            let executor = SshExecutor::default_runner();
            dispatch(command, apps, &hosts, &executor, &reporter).await;
        }

        Ok(())
    }
}
