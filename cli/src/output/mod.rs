//! Output formatting module

pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// Print a host section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.style(self.styles.header));
        }
    }

    /// Print a command echo line prefixed with `$`. Suppressed when `quiet`.
    pub fn command(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "$".style(self.styles.dim));
        }
    }

    /// Print one line of captured remote output. Suppressed when `quiet`.
    pub fn output_line(&self, msg: &str) {
        if !self.quiet {
            println!("    {msg}");
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print one line of error detail to stderr. Never suppressed.
    pub fn error_detail(&self, msg: &str) {
        eprintln!("    {msg}");
    }
}
