use std::{fs::File, io::BufWriter, path::Path};

use tracing::info;

use crate::{
    checker::{parse_output, run_checker},
    error::Result,
    report::write_report,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    // The checker printed nothing; the CSV holds only the header
    NoIssues,
    Written { diagnostics: usize },
}

/// Runs the checker on `target` and writes its findings to `output` as CSV.
pub fn export(checker: &str, target: &str, output: &Path) -> Result<ReportOutcome> {
    let stdout = run_checker(checker, target)?;
    let diagnostics = parse_output(&stdout);
    write_report(BufWriter::new(File::create(output)?), &diagnostics)?;

    if stdout.lines().next().is_none() {
        return Ok(ReportOutcome::NoIssues);
    }
    info!("Wrote {} diagnostics to {:?}", diagnostics.len(), output);
    Ok(ReportOutcome::Written {
        diagnostics: diagnostics.len(),
    })
}
