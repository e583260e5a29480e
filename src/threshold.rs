//! Pass/fail evaluation of computed coverage against configured minimums.

use crate::model::Coverage;

/// Minimum coverage ratios required for a run to pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thresholds {
    pub min_coverage: f64,
    pub min_branches: f64,
}

impl Thresholds {
    pub fn new(min_coverage: f64, min_branches: f64) -> Self {
        Self {
            min_coverage,
            min_branches,
        }
    }
}

/// One diagnostic line per metric that is strictly below its minimum.
/// Both metrics are always checked.
#[must_use]
pub fn violations(coverage: &Coverage, thresholds: &Thresholds) -> Vec<String> {
    let mut out = Vec::new();
    if coverage.instructions < thresholds.min_coverage {
        out.push(format!(
            "Coverage of {} is below passing threshold of {}",
            coverage.instructions, thresholds.min_coverage
        ));
    }
    if coverage.branches < thresholds.min_branches {
        out.push(format!(
            "Branches of {} is below passing threshold of {}",
            coverage.branches, thresholds.min_branches
        ));
    }
    out
}

/// Compute the violations once and log each of them as a warning.
pub fn check(coverage: &Coverage, thresholds: &Thresholds) -> Vec<String> {
    let found = violations(coverage, thresholds);
    for message in &found {
        log::warn!("{message}");
    }
    found
}

/// Returns true if either metric is below its minimum, logging each violation.
/// Turning a failure into a failed run is left to the caller.
pub fn is_failing(coverage: &Coverage, thresholds: &Thresholds) -> bool {
    !check(coverage, thresholds).is_empty()
}
