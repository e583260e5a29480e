//! One end-to-end run: locate reports, aggregate, check thresholds, write
//! badges.

use std::path::PathBuf;

use crate::aggregate::aggregate;
use crate::badge::{BadgeKind, BadgeSpec};
use crate::config::{Config, MissingReportPolicy};
use crate::error::{CovbadgeError, Result};
use crate::model::Coverage;
use crate::{locate, paths, threshold};

/// Result of a run that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No reports to work from, or some were missing under the quiet policy.
    Skipped,
    /// Coverage was computed and passed the thresholds; `badges` lists the
    /// files written.
    Computed {
        coverage: Coverage,
        badges: Vec<PathBuf>,
    },
}

/// Execute a run.
///
/// Thresholds are checked before any badge is written, so a failing run
/// leaves no badges behind.
pub fn run(config: &Config) -> Result<Outcome> {
    let badges_directory = paths::normalize_dir(&config.badges_directory);

    let candidates: Vec<PathBuf> = config
        .report_files
        .iter()
        .map(|file| config.root.join(file))
        .collect();
    let reports = locate::filter_missing(
        &candidates,
        config.on_missing_report == MissingReportPolicy::Fail,
    )?;
    let none_missing = reports.len() == config.report_files.len();
    if reports.is_empty()
        || (!none_missing && config.on_missing_report == MissingReportPolicy::Quiet)
    {
        log::debug!(
            "Skipping coverage computation ({} of {} reports found)",
            reports.len(),
            config.report_files.len()
        );
        return Ok(Outcome::Skipped);
    }

    let coverage = aggregate(&reports)?;

    let found = threshold::check(&coverage, &config.thresholds);
    if !found.is_empty() {
        log::error!("Failing the workflow run.");
        return Err(CovbadgeError::ThresholdViolation(found));
    }

    let badges = write_badges(config, &badges_directory, &coverage)?;

    Ok(Outcome::Computed { coverage, badges })
}

/// Write the requested badges under `config.root`, creating their parent
/// directories as needed. Returns the paths written.
fn write_badges(config: &Config, directory: &str, coverage: &Coverage) -> Result<Vec<PathBuf>> {
    let mut requested = Vec::new();
    if config.generate_coverage_badge {
        requested.push((
            &config.coverage_badge_filename,
            BadgeSpec::new(coverage.instructions, BadgeKind::Coverage),
        ));
    }
    if config.generate_branches_badge {
        requested.push((
            &config.branches_badge_filename,
            BadgeSpec::new(coverage.branches, BadgeKind::Branches),
        ));
    }

    let mut written = Vec::with_capacity(requested.len());
    for (filename, spec) in requested {
        let resolved = paths::resolve(directory, filename);
        let (parent, _) = paths::split(&resolved);
        if parent != "." {
            std::fs::create_dir_all(config.root.join(&parent))?;
        }
        let path = config.root.join(&resolved);
        std::fs::write(&path, spec.render())?;
        log::info!("Wrote {} badge ({}) to {}", spec.kind, spec.label, path.display());
        written.push(path);
    }
    Ok(written)
}
