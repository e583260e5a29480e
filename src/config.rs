use std::path::PathBuf;

use crate::error::CovbadgeError;
use crate::threshold::Thresholds;

/// What to do when a listed report file does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingReportPolicy {
    /// Any missing report fails the run.
    Fail,
    /// If any report is missing, skip thresholds and badges without failing.
    Quiet,
    /// Carry on with the reports that do exist.
    Badges,
}

impl MissingReportPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingReportPolicy::Fail => "fail",
            MissingReportPolicy::Quiet => "quiet",
            MissingReportPolicy::Badges => "badges",
        }
    }
}

impl std::str::FromStr for MissingReportPolicy {
    type Err = CovbadgeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(MissingReportPolicy::Fail),
            "quiet" => Ok(MissingReportPolicy::Quiet),
            "badges" => Ok(MissingReportPolicy::Badges),
            _ => Err(CovbadgeError::InvalidPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for MissingReportPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory that relative report paths and the badge directory are
    /// resolved against. Empty means the current directory.
    pub root: PathBuf,
    pub report_files: Vec<PathBuf>,
    pub badges_directory: String,
    pub coverage_badge_filename: String,
    pub branches_badge_filename: String,
    pub generate_coverage_badge: bool,
    pub generate_branches_badge: bool,
    pub on_missing_report: MissingReportPolicy,
    pub thresholds: Thresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            report_files: vec![PathBuf::from("target/site/jacoco/jacoco.csv")],
            badges_directory: ".github/badges".to_string(),
            coverage_badge_filename: "jacoco.svg".to_string(),
            branches_badge_filename: "branches.svg".to_string(),
            generate_coverage_badge: true,
            generate_branches_badge: false,
            on_missing_report: MissingReportPolicy::Fail,
            thresholds: Thresholds::default(),
        }
    }
}
