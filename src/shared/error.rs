use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All lines were read, reversed and written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable input, unwritable output, bad config, etc.)
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for line reversal.
///
/// Source and sink failures are fatal to a run and reach the caller
/// unchanged; reversal itself cannot fail.
#[derive(Debug, Error)]
pub enum ReverserError {
    #[error("Input is unavailable: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    SourceUnavailable { path: PathBuf, details: String },

    #[error("Output is unavailable: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    SinkUnavailable { path: PathBuf, details: String },

    /// Validation error for lines, requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ReverserError {
    /// Returns true when the error came from reading the input
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, ReverserError::SourceUnavailable { .. })
    }

    /// Returns true when the error came from writing the output
    pub fn is_sink_unavailable(&self) -> bool {
        matches!(self, ReverserError::SinkUnavailable { .. })
    }
}
