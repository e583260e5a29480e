use thiserror::Error;

#[derive(Error, Debug)]
pub enum CovbadgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed report {path}: {message}")]
    MalformedReport { path: String, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing coverage report(s): {}", .0.join(", "))]
    MissingReports(Vec<String>),

    #[error("Coverage below passing threshold: {}", .0.join("; "))]
    ThresholdViolation(Vec<String>),

    #[error("Invalid value for on-missing-report: '{0}'. Supported: fail, quiet, badges")]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, CovbadgeError>;
