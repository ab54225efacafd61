//! CLI-specific error types
//!
//! Every CLI error terminates the run; there is nothing to retry.

use std::fmt;
use std::io;

use crate::render::SqlParseError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout/config file)
    IoError,
    /// Rendered output failed to parse back
    ParseError,
    /// Round-trip verification mismatch
    VerifyFailed,
    /// Sampled from an empty design set
    EmptySet,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "BACE_CLI_CONFIG_ERROR",
            Self::IoError => "BACE_CLI_IO_ERROR",
            Self::ParseError => "BACE_CLI_PARSE_ERROR",
            Self::VerifyFailed => "BACE_CLI_VERIFY_FAILED",
            Self::EmptySet => "BACE_CLI_EMPTY_SET",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Verification mismatch
    pub fn verify_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::VerifyFailed, msg)
    }

    /// Empty design set
    pub fn empty_set() -> Self {
        Self::new(CliErrorCode::EmptySet, "no designs to sample from")
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SqlParseError> for CliError {
    fn from(e: SqlParseError) -> Self {
        Self::new(CliErrorCode::ParseError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
