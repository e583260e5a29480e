//! GitHub Actions output variables for the computed coverage.

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::model::Coverage;

fn outputs(coverage: &Coverage) -> [(&'static str, f64); 2] {
    [
        ("coverage", coverage.instructions),
        ("branches", coverage.branches),
    ]
}

/// `name=value` lines in the format expected in the `GITHUB_OUTPUT` file.
#[must_use]
pub fn format_outputs(coverage: &Coverage) -> String {
    outputs(coverage)
        .iter()
        .map(|(name, value)| format!("{name}={value}\n"))
        .collect()
}

/// Legacy `::set-output` workflow commands, for runners without
/// `GITHUB_OUTPUT`.
#[must_use]
pub fn workflow_commands(coverage: &Coverage) -> String {
    outputs(coverage)
        .iter()
        .map(|(name, value)| format!("::set-output name={name}::{value}\n"))
        .collect()
}

/// Append the outputs to the file at `path`.
pub fn append_outputs(path: &Path, coverage: &Coverage) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.write_all(format_outputs(coverage).as_bytes())
        .with_context(|| format!("Failed to write outputs to {}", path.display()))?;
    Ok(())
}

/// Publish `coverage` and `branches` to the workflow: appended to the file
/// named by `GITHUB_OUTPUT` when set, printed as workflow commands otherwise.
pub fn set_outputs(coverage: &Coverage) -> Result<()> {
    match std::env::var_os("GITHUB_OUTPUT") {
        Some(path) if !path.is_empty() => append_outputs(Path::new(&path), coverage),
        _ => {
            print!("{}", workflow_commands(coverage));
            Ok(())
        }
    }
}
