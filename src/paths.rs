//! Normalization of caller-supplied badge paths.
//!
//! Inputs come straight from CI configuration, where `./badges`, `/badges`,
//! `badges/` and `.` all show up for what is meant to be a directory relative
//! to the workspace. Everything produced here is relative and uses `/`.

/// Strip one leading `./`, then any leading `/`.
// Every leading `/` goes, not just one, so `//badges` cannot yield an
// absolute path or a `//` once joined.
fn strip_leading(path: &str) -> &str {
    let path = path.strip_prefix("./").unwrap_or(path);
    path.trim_start_matches('/')
}

/// Join a badge directory and file name into one relative path.
///
/// An empty directory or `.` means the current directory, in which case the
/// bare file name is returned.
#[must_use]
pub fn resolve(directory: &str, filename: &str) -> String {
    let filename = strip_leading(filename);
    let directory = strip_leading(directory).trim_end_matches('/');
    if directory.is_empty() || directory == "." {
        filename.to_string()
    } else {
        format!("{directory}/{filename}")
    }
}

/// Split a path into its directory and file name.
///
/// With no `/` left after stripping the leading `./` and `/`, the directory
/// is `.`.
#[must_use]
pub fn split(path_with_filename: &str) -> (String, String) {
    let path = strip_leading(path_with_filename);
    match path.rsplit_once('/') {
        Some((directory, filename)) => (directory.to_string(), filename.to_string()),
        None => (".".to_string(), path.to_string()),
    }
}

/// Normalize the badge directory; the current directory becomes `""`.
#[must_use]
pub fn normalize_dir(directory: &str) -> String {
    let directory = strip_leading(directory);
    if directory == "." {
        String::new()
    } else {
        directory.to_string()
    }
}
