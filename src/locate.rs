use std::path::{Path, PathBuf};

use crate::error::{CovbadgeError, Result};

/// Keep the reports that exist on disk, in their original order.
///
/// See [`filter_missing_with`].
pub fn filter_missing(files: &[PathBuf], fail_if_missing: bool) -> Result<Vec<PathBuf>> {
    filter_missing_with(files, fail_if_missing, Path::exists)
}

/// Keep the reports for which `exists` returns true, warning about each one
/// that is missing.
///
/// With `fail_if_missing`, any missing report is an error, not only when all
/// of them are missing.
pub fn filter_missing_with<F>(
    files: &[PathBuf],
    fail_if_missing: bool,
    exists: F,
) -> Result<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    let mut found = Vec::with_capacity(files.len());
    let mut missing = Vec::new();
    for file in files {
        if exists(file.as_path()) {
            found.push(file.clone());
        } else {
            log::warn!("Report file {} does not exist.", file.display());
            missing.push(file.display().to_string());
        }
    }

    if found.is_empty() {
        log::warn!("No JaCoCo csv reports found.");
    }
    if fail_if_missing && (found.is_empty() || !missing.is_empty()) {
        return Err(CovbadgeError::MissingReports(missing));
    }
    Ok(found)
}
