use std::process::Command;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::error::{ReportError, Result};

/// One `file:line:column:message` finding from the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: String,
    pub line: String,
    pub column: String,
    pub error: String,
}

impl Diagnostic {
    // The message may itself contain colons, so only split three times
    pub fn parse(line: &str) -> Option<Self> {
        let (file, line_number, column, error) =
            line.splitn(4, ':').map(str::trim).collect_tuple()?;
        Some(Diagnostic {
            file: file.to_owned(),
            line: line_number.to_owned(),
            column: column.to_owned(),
            error: error.to_owned(),
        })
    }
}

/// Lines with fewer than four fields are skipped; blank lines silently.
pub fn parse_output(output: &str) -> Vec<Diagnostic> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let diagnostic = Diagnostic::parse(line);
            if diagnostic.is_none() {
                warn!("Skipping malformed checker line: {:?}", line);
            }
            diagnostic
        })
        .collect()
}

/// Runs `program target` and returns its stdout. Checkers exit non-zero when
/// they find something, so the exit status is only logged.
pub fn run_checker(program: &str, target: &str) -> Result<String> {
    let output = Command::new(program)
        .arg(target)
        .output()
        .map_err(|source| ReportError::Spawn {
            program: program.to_owned(),
            source,
        })?;
    debug!("{} {} exited with {}", program, target, output.status);
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
