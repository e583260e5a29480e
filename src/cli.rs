//! Command-line surface.
//!
//! Arguments are positional and in the same order as the inputs of the
//! GitHub Action that wraps this binary, so the action can pass its inputs
//! through unchanged.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, MissingReportPolicy};
use crate::error::Result;
use crate::model::parse_percentage;
use crate::threshold::Thresholds;

/// covbadge: coverage badges and pass/fail thresholds from JaCoCo CSV reports.
#[derive(Parser, Debug)]
#[command(name = "covbadge", version, about)]
pub struct Cli {
    /// Whitespace-separated list of JaCoCo CSV report files.
    #[arg(default_value = "target/site/jacoco/jacoco.csv")]
    pub jacoco_csv_files: String,

    /// Directory the badges are written to.
    #[arg(default_value = ".github/badges")]
    pub badges_directory: String,

    /// File name of the instruction coverage badge.
    #[arg(default_value = "jacoco.svg")]
    pub coverage_badge_filename: String,

    /// File name of the branch coverage badge.
    #[arg(default_value = "branches.svg")]
    pub branches_badge_filename: String,

    /// Generate the coverage badge ("true" or "false").
    #[arg(default_value = "true")]
    pub generate_coverage_badge: String,

    /// Generate the branches badge ("true" or "false").
    #[arg(default_value = "false")]
    pub generate_branches_badge: String,

    /// What to do about missing reports: fail, quiet or badges.
    #[arg(default_value = "fail")]
    pub on_missing_report: String,

    /// Minimum instruction coverage, e.g. "60%", "60" or "0.6".
    #[arg(default_value = "0")]
    pub fail_if_coverage_less_than: String,

    /// Minimum branch coverage, e.g. "60%", "60" or "0.6".
    #[arg(default_value = "0")]
    pub fail_if_branches_less_than: String,

    /// Directory that report and badge paths are relative to
    /// (default: the working directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// Only a case-insensitive "true" enables a flag.
fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

impl Cli {
    /// Build the run configuration. An unknown missing-report policy is
    /// rejected here, before anything is read.
    pub fn into_config(self) -> Result<Config> {
        let on_missing_report = self.on_missing_report.parse::<MissingReportPolicy>()?;
        Ok(Config {
            root: self.root.unwrap_or_default(),
            report_files: self
                .jacoco_csv_files
                .split_whitespace()
                .map(PathBuf::from)
                .collect(),
            badges_directory: self.badges_directory,
            coverage_badge_filename: self.coverage_badge_filename,
            branches_badge_filename: self.branches_badge_filename,
            generate_coverage_badge: parse_flag(&self.generate_coverage_badge),
            generate_branches_badge: parse_flag(&self.generate_branches_badge),
            on_missing_report,
            thresholds: Thresholds::new(
                parse_percentage(&self.fail_if_coverage_less_than),
                parse_percentage(&self.fail_if_branches_less_than),
            ),
        })
    }
}
