//! Native exceptions
//!
//! A native exception is anything that unwinds out of a guarded block. Blocks
//! raise typed exceptions with [`raise`]; ordinary panics are classified from
//! their payload.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

use crate::types::UNKNOWN_EXCEPTION_MESSAGE;

/// Exception name given to unwinds that did not come from [`raise`]
pub const PANIC_EXCEPTION_NAME: &str = "RustPanic";

/// An exception identified by a name and a reason
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeException {
    /// Exception name (e.g., "BadPDF")
    pub name: String,
    /// Why the exception was raised, may be empty
    #[serde(default)]
    pub reason: String,
}

impl NativeException {
    /// Create a new exception
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Classify an unwind payload
    ///
    /// `NativeException` payloads are returned as-is. String panics keep their
    /// message as the reason.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        if let Some(exception) = payload.downcast_ref::<NativeException>() {
            exception.clone()
        } else if let Some(message) = payload.downcast_ref::<&'static str>() {
            Self::new(PANIC_EXCEPTION_NAME, *message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::new(PANIC_EXCEPTION_NAME, message.as_str())
        } else {
            Self::new(PANIC_EXCEPTION_NAME, "")
        }
    }

    /// One-line summary built from the name and reason, never empty
    pub fn summary(&self) -> String {
        let name = self.name.trim();
        let reason = self.reason.trim();
        match (name.is_empty(), reason.is_empty()) {
            (false, false) => format!("{}: {}", name, reason),
            (false, true) => name.to_string(),
            (true, false) => reason.to_string(),
            (true, true) => UNKNOWN_EXCEPTION_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for NativeException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

impl std::error::Error for NativeException {}

/// Raise a native exception from inside a guarded block
///
/// Unwinds without invoking the panic hook, so nothing is printed.
pub fn raise(name: impl Into<String>, reason: impl Into<String>) -> ! {
    std::panic::resume_unwind(Box::new(NativeException::new(name, reason)))
}
