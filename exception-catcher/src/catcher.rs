//! The catch boundary
//!
//! Runs a caller-supplied block under `catch_unwind` and turns whatever
//! unwinds out of it into an [`ExceptionError`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::config::CatcherConfig;
use crate::exception::NativeException;
use crate::hook::SilenceGuard;
use crate::types::{CatcherError, ExceptionError, Result};

/// Runs blocks and converts native exceptions into error objects
///
/// A catcher holds no state besides its configuration. It can be shared
/// between threads, each call guards only its own block.
#[derive(Debug, Clone, Default)]
pub struct ExceptionCatcher {
    config: CatcherConfig,
}

impl ExceptionCatcher {
    /// Create a catcher from a validated configuration
    pub fn new(config: CatcherConfig) -> std::result::Result<Self, CatcherError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this catcher was built with
    pub fn config(&self) -> &CatcherConfig {
        &self.config
    }

    /// Run `block` and report a caught exception as an error
    pub fn perform<F>(&self, block: F) -> Result<()>
    where
        F: FnOnce(),
    {
        // Plain panics escape when not caught; their hook output stays visible
        let silence = self.config.silence_panic_hook && self.config.catch_panics;
        let _silence = silence.then(SilenceGuard::new);

        let payload = match panic::catch_unwind(AssertUnwindSafe(block)) {
            Ok(()) => return Ok(()),
            Err(payload) => payload,
        };

        if !self.config.catch_panics && !payload.is::<NativeException>() {
            panic::resume_unwind(payload);
        }

        let exception = NativeException::from_payload(payload.as_ref());
        drop_payload(payload);

        log::debug!(
            "Caught native exception {:?} (reason: {:?})",
            exception.name,
            exception.reason
        );
        Err(ExceptionError::caught(self.config.domain.as_str(), exception))
    }

    /// Run `block`, writing any error into `error`
    ///
    /// Returns `true` when the block completed normally; `error` is then left
    /// untouched. A missing block is reported as an invalid argument without
    /// running anything. With no slot the error is discarded.
    pub fn perform_with_slot<F>(
        &self,
        block: Option<F>,
        error: Option<&mut Option<ExceptionError>>,
    ) -> bool
    where
        F: FnOnce(),
    {
        let outcome = match block {
            Some(block) => self.perform(block),
            None => Err(ExceptionError::null_block(self.config.domain.as_str())),
        };

        match outcome {
            Ok(()) => true,
            Err(err) => {
                if let Some(slot) = error {
                    *slot = Some(err);
                }
                false
            }
        }
    }
}

/// Drop an unwind payload without letting a panicking destructor escape
fn drop_payload(payload: Box<dyn Any + Send>) {
    if let Err(nested) = panic::catch_unwind(AssertUnwindSafe(move || drop(payload))) {
        log::warn!("Exception payload panicked while being dropped; leaking it");
        std::mem::forget(nested);
    }
}

/// Run `block` with the default catcher, returning a `Result`
pub fn catch_exception<F>(block: F) -> Result<()>
where
    F: FnOnce(),
{
    ExceptionCatcher::default().perform(block)
}

/// Run `block` with the default catcher, reporting failure through `error`
///
/// Returns `true` on success. See [`ExceptionCatcher::perform_with_slot`].
pub fn perform_block_catching_exception<F>(
    block: Option<F>,
    error: Option<&mut Option<ExceptionError>>,
) -> bool
where
    F: FnOnce(),
{
    ExceptionCatcher::default().perform_with_slot(block, error)
}
