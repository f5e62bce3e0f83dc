//! Error types for the conjugation pipeline.
//!
//! Library code returns [`Result`] with a [`ConjugationError`]; the binary
//! wraps these in `anyhow` for context and maps them to exit codes.
//!
//! # Error Codes
//!
//! - E001-E009: input and output errors
//! - E010-E019: parse errors
//! - E020-E029: configuration errors
//! - E030-E039: statistic errors
//!
//! # Example
//!
//! ```rust
//! use conjugation::errors::{ConjugationError, ErrorCode};
//!
//! let err = ConjugationError::sample_size(8);
//! assert_eq!(err.code(), ErrorCode::SAMPLE_SIZE);
//! assert!(err.is_user_fixable());
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::MIN_PAIRS;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// Input file does not exist
    pub const INPUT_NOT_FOUND: ErrorCode = ErrorCode("E001");
    /// Output destination could not be written
    pub const OUTPUT: ErrorCode = ErrorCode("E002");
    /// Generic I/O failure
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");

    /// Line is not exactly two integers
    pub const PARSE_LINE: ErrorCode = ErrorCode("E010");

    /// Invalid configuration file or value
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");

    /// Too few pairs
    pub const SAMPLE_SIZE: ErrorCode = ErrorCode("E030");
    /// Degenerate partition
    pub const DOMAIN: ErrorCode = ErrorCode("E031");
    /// JSON rendering failure
    pub const SERIALIZATION: ErrorCode = ErrorCode("E039");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Main error type for conjugation operations
#[derive(Debug, Error)]
pub enum ConjugationError {
    /// The input path does not reference an existing file
    #[error("input file does not exist: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// A line did not decompose into exactly two integers
    #[error("parse error on line {line}: {message} (got {content:?})")]
    Parse {
        line: usize,
        content: String,
        message: String,
    },

    /// Fewer pairs than the statistic needs
    #[error("expected at least {minimum} pairs, found {found}")]
    SampleSize { found: usize, minimum: usize },

    /// Degenerate partition making the statistic undefined
    #[error("domain error: {0}")]
    Domain(String),

    /// Configuration errors
    #[error("configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Output destination failures
    #[error("failed to write to {destination}: {message}")]
    Output {
        destination: String,
        message: String,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ConjugationError {
    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, content: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            content: content.into(),
            message: message.into(),
        }
    }

    /// Create a sample size error against [`MIN_PAIRS`]
    pub fn sample_size(found: usize) -> Self {
        Self::SampleSize {
            found,
            minimum: MIN_PAIRS,
        }
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }

    /// Create a configuration error with optional path context
    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path,
        }
    }

    pub fn output(destination: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Output {
            destination: destination.into(),
            message: message.into(),
        }
    }

    /// Get the structured error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InputNotFound { .. } => ErrorCode::INPUT_NOT_FOUND,
            Self::Parse { .. } => ErrorCode::PARSE_LINE,
            Self::SampleSize { .. } => ErrorCode::SAMPLE_SIZE,
            Self::Domain(_) => ErrorCode::DOMAIN,
            Self::Config { .. } => ErrorCode::CONFIG_INVALID,
            Self::Output { .. } => ErrorCode::OUTPUT,
            Self::Io(_) => ErrorCode::IO_GENERIC,
            Self::Json(_) => ErrorCode::SERIALIZATION,
        }
    }

    /// Errors the user can fix by changing the input or configuration.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound { .. }
                | Self::Parse { .. }
                | Self::SampleSize { .. }
                | Self::Config { .. }
        )
    }

    /// Get the suggested process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 3,
            Self::SampleSize { .. } | Self::Domain(_) => 4,
            Self::Parse { .. } => 5,
            Self::InputNotFound { .. } | Self::Output { .. } | Self::Io(_) | Self::Json(_) => 1,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, ConjugationError>;
