//! Exception Catcher Library
//!
//! Runs a side-effecting block and converts any native exception that unwinds
//! out of it into a structured error object, so callers that cannot handle an
//! unwind themselves get a plain success/failure answer instead.
//!
//! # Architecture
//!
//! - A native exception is an unwind: either raised with [`raise`] (typed
//!   name and reason) or an ordinary panic
//! - The catch boundary is per call and holds no shared state
//! - Error objects carry a domain, a numeric code and a non-empty message
//!
//! The library does NOT:
//! - Retry or recover the failed block
//! - Catch aborts, fatal signals or foreign exceptions
//! - Log anything above `debug` level on the normal failure path
//!
//! The C ABI lives in the `exception-catcher-ffi` crate.
//!
//! # Example Usage
//!
//! ```
//! use exception_catcher::{perform_block_catching_exception, raise, ErrorCode};
//!
//! let mut error = None;
//! let ok = perform_block_catching_exception(
//!     Some(|| raise("BadPDF", "missing xref")),
//!     Some(&mut error),
//! );
//!
//! assert!(!ok);
//! let error = error.unwrap();
//! assert_eq!(error.code, ErrorCode::ExceptionCaught);
//! assert_eq!(error.message, "BadPDF: missing xref");
//! ```

// Public modules
pub mod catcher;
pub mod config;
pub mod exception;
pub mod types;

// Re-export main types for convenience
pub use catcher::{catch_exception, perform_block_catching_exception, ExceptionCatcher};
pub use config::CatcherConfig;
pub use exception::{raise, NativeException, PANIC_EXCEPTION_NAME};
pub use types::{
    CatcherError, ErrorCode, ExceptionError, Result, ERROR_DOMAIN, NULL_BLOCK_MESSAGE,
    UNKNOWN_EXCEPTION_MESSAGE,
};

// Internal modules (not exposed in public API)
mod hook;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
