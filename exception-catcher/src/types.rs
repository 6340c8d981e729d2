//! Core types for the exception catcher
//!
//! This module defines the error object handed back to callers when a guarded
//! block unwinds, the numeric codes it carries, and the configuration errors
//! raised when building a catcher.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::exception::NativeException;

/// Error domain reported by every error object this crate produces
pub const ERROR_DOMAIN: &str = "PDFQuickFix.ExceptionCatcher";

/// Message used when a caught exception has neither a name nor a reason
pub const UNKNOWN_EXCEPTION_MESSAGE: &str = "Unknown native exception";

/// Message used when no block was supplied
pub const NULL_BLOCK_MESSAGE: &str = "block must not be null";

/// Result type for guarded operations
pub type Result<T> = std::result::Result<T, ExceptionError>;

/// Numeric error codes carried by [`ExceptionError`]
///
/// The values are stable and shared with the C ABI.
#[repr(i64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A native exception unwound out of the block
    ExceptionCaught = 1,
    /// The call was made without a block
    InvalidArgument = 2,
}

impl ErrorCode {
    /// Raw numeric value of this code
    pub fn as_i64(self) -> i64 {
        self as i64
    }

    /// Look up a code from its raw value
    pub fn from_i64(raw: i64) -> Option<Self> {
        match raw {
            1 => Some(ErrorCode::ExceptionCaught),
            2 => Some(ErrorCode::InvalidArgument),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::ExceptionCaught => write!(f, "ExceptionCaught"),
            ErrorCode::InvalidArgument => write!(f, "InvalidArgument"),
        }
    }
}

/// Structured error produced at the catch boundary
///
/// Always carries a domain, a code and a non-empty message. When the failure
/// came from an unwind, the classified exception is kept as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ExceptionError {
    /// Domain tag identifying the catcher
    pub domain: String,
    /// What kind of failure this is
    pub code: ErrorCode,
    /// Human-readable summary, never empty
    pub message: String,
    /// The exception that was caught, if any
    #[serde(default)]
    pub exception: Option<NativeException>,
}

impl ExceptionError {
    /// Build the error object for a caught exception
    pub fn caught(domain: impl Into<String>, exception: NativeException) -> Self {
        Self {
            domain: domain.into(),
            code: ErrorCode::ExceptionCaught,
            message: exception.summary(),
            exception: Some(exception),
        }
    }

    /// Build the error object for a call made without a block
    pub fn null_block(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code: ErrorCode::InvalidArgument,
            message: NULL_BLOCK_MESSAGE.to_string(),
            exception: None,
        }
    }

    /// Name of the caught exception, if any
    pub fn exception_name(&self) -> Option<&str> {
        self.exception.as_ref().map(|e| e.name.as_str())
    }

    /// Reason of the caught exception, if any
    pub fn exception_reason(&self) -> Option<&str> {
        self.exception.as_ref().map(|e| e.reason.as_str())
    }

    /// Key/value view of the error, for callers that forward it as a dictionary
    pub fn user_info(&self) -> Map<String, Value> {
        let mut info = Map::new();
        info.insert("description".to_string(), Value::String(self.message.clone()));
        if let Some(exception) = &self.exception {
            info.insert("exception_name".to_string(), Value::String(exception.name.clone()));
            info.insert(
                "exception_reason".to_string(),
                Value::String(exception.reason.clone()),
            );
        }
        info
    }
}

/// Errors that can occur while configuring a catcher
#[derive(Debug, thiserror::Error)]
pub enum CatcherError {
    #[error("Failed to parse catcher config: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid catcher config: {0}")]
    InvalidConfig(String),
}
