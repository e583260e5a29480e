use std::path::Path;

use crate::error::{CovbadgeError, Result};
use crate::model::{Coverage, ReportCounts};
use crate::parsers::jacoco::JacocoCsvParser;
use crate::parsers::Parser;

/// Read every report, sum the counters across all of them, and reduce the
/// totals to instruction and branch coverage.
///
/// Files are read one at a time in the given order. The first unreadable or
/// malformed report aborts the whole aggregation, as does a report whose
/// counters overflow the running totals.
pub fn aggregate<P: AsRef<Path>>(files: &[P]) -> Result<Coverage> {
    let mut totals = ReportCounts::new();
    for path in files {
        let path = path.as_ref();
        totals = totals
            .checked_add(read_report(path)?)
            .ok_or_else(|| CovbadgeError::MalformedReport {
                path: path.display().to_string(),
                message: "counter overflow when summing with earlier reports".to_string(),
            })?;
    }
    log::debug!(
        "Aggregated {} report(s): instructions {:?}, branches {:?}",
        files.len(),
        totals.instructions,
        totals.branches
    );
    Ok(totals.coverage())
}

/// Parse a single report file into its counters.
pub fn read_report(path: &Path) -> Result<ReportCounts> {
    let content = std::fs::read(path)?;
    JacocoCsvParser
        .parse(&content)
        .map_err(|e| match e {
            CovbadgeError::Parse(message) => CovbadgeError::MalformedReport {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
}
