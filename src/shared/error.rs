use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow IDE launchers and CI systems to distinguish a clean
/// extraction from a degraded one and from outright failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - model extracted (diagnostics allowed unless strict mode)
    Success = 0,
    /// Model extracted, but diagnostics were reported while `--strict` was set
    DiagnosticsReported = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable snapshot, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DiagnosticsReported => write!(f, "Diagnostics Reported (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for project model extraction.
///
/// These are the unrecoverable failures around an extraction run. Failures
/// raised by the build tree during a run never end up here: they are
/// downgraded to diagnostics inside the model.
#[derive(Debug, Error)]
pub enum BuildModelError {
    #[error("Build tree snapshot not found: {path}\n\n💡 Hint: {suggestion}")]
    SnapshotNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse build tree snapshot: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the snapshot matches the documented schema")]
    SnapshotParseError { path: PathBuf, details: String },

    #[error("Unsupported snapshot format: {path}\n\n💡 Hint: Use a .json, .yaml, .yml or .toml file")]
    UnsupportedSnapshotFormat { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a build tree snapshot file or a directory containing one")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
