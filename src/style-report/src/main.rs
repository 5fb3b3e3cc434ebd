use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use common::utility::init_logging;
use style_report::entrypoint::{export, ReportOutcome};
use tracing::{error, Level};

/// Run a style checker over a file and export its findings as CSV.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File handed to the checker
    target: String,

    /// Checker program; must print `file:line:column:message` lines
    #[arg(long, default_value = "pycodestyle")]
    checker: String,

    #[arg(long, short, default_value = "result.csv")]
    output: PathBuf,
}

fn main() -> ExitCode {
    init_logging(Level::INFO);
    let args = Args::parse();
    match export(&args.checker, &args.target, &args.output) {
        Ok(ReportOutcome::NoIssues) => {
            println!("No issues found by {} in {}", args.checker, args.target);
            ExitCode::SUCCESS
        }
        Ok(ReportOutcome::Written { .. }) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
