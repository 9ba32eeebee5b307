//! Fleet CLI - remote operations for the BOSAGORA validator hosts

use clap::Parser;
use clap::error::ErrorKind;

use fleet_cli::cli::Cli;

#[tokio::main]
async fn main() {
    // clap's own exit() uses code 2 for parse errors; this tool keeps the
    // historical contract of exit 1, with help and version still exiting 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = cli.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
