//! C ABI for the exception catcher
//!
//! Exposes `ec_perform_block_catching_exception` and a small set of accessor
//! functions for the error object it hands back. The matching declarations
//! are in `include/exception_catcher.h`.
//!
//! Error objects are heap-allocated by this library and must be released
//! with `ec_error_free`.

use std::ffi::{c_char, c_void, CString};
use std::ptr;

use exception_catcher::{ExceptionCatcher, ExceptionError};

/// Block invoked by `ec_perform_block_catching_exception`
///
/// Uses the `C-unwind` ABI so that an exception raised by a Rust-implemented
/// block can reach the catch boundary.
pub type EcBlock = Option<unsafe extern "C-unwind" fn(context: *mut c_void)>;

/// Opaque error object handed to C callers
#[derive(Debug)]
pub struct EcError {
    inner: ExceptionError,
    domain: CString,
    message: CString,
}

impl EcError {
    /// The underlying Rust error object
    pub fn inner(&self) -> &ExceptionError {
        &self.inner
    }
}

impl From<ExceptionError> for EcError {
    fn from(inner: ExceptionError) -> Self {
        Self {
            domain: to_c_string(&inner.domain),
            message: to_c_string(&inner.message),
            inner,
        }
    }
}

/// Convert to a C string, replacing interior NULs with U+FFFD
fn to_c_string(text: &str) -> CString {
    CString::new(text.replace('\0', "\u{FFFD}")).unwrap_or_default()
}

/// Run `block(context)`, catching any exception that unwinds out of it
///
/// Returns `true` when the block completed normally; `*error` is then left
/// untouched. On failure a new error object is stored in `*error` when
/// `error` is non-null. A null `block` fails with the invalid-argument code.
///
/// # Safety
///
/// `block` must be safe to call with `context`. `error`, when non-null, must
/// point to writable storage for one pointer.
#[no_mangle]
pub unsafe extern "C" fn ec_perform_block_catching_exception(
    block: EcBlock,
    context: *mut c_void,
    error: *mut *mut EcError,
) -> bool {
    if block.is_none() {
        log::debug!("ec_perform_block_catching_exception called with a null block");
    }

    let mut slot = None;
    let ok = ExceptionCatcher::default().perform_with_slot(
        block.map(|block| move || block(context)),
        Some(&mut slot),
    );

    if let Some(err) = slot {
        if !error.is_null() {
            *error = Box::into_raw(Box::new(EcError::from(err)));
        }
    }
    ok
}

/// Numeric code of an error object, 0 for a null pointer
///
/// # Safety
///
/// `error` must be null or a pointer returned by this library and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn ec_error_code(error: *const EcError) -> i64 {
    match error.as_ref() {
        Some(error) => error.inner.code.as_i64(),
        None => 0,
    }
}

/// Domain of an error object, null for a null pointer
///
/// The string is owned by the error object.
///
/// # Safety
///
/// `error` must be null or a pointer returned by this library and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn ec_error_domain(error: *const EcError) -> *const c_char {
    match error.as_ref() {
        Some(error) => error.domain.as_ptr(),
        None => ptr::null(),
    }
}

/// Message of an error object, null for a null pointer
///
/// The string is owned by the error object.
///
/// # Safety
///
/// `error` must be null or a pointer returned by this library and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn ec_error_message(error: *const EcError) -> *const c_char {
    match error.as_ref() {
        Some(error) => error.message.as_ptr(),
        None => ptr::null(),
    }
}

/// Release an error object; null is ignored
///
/// # Safety
///
/// `error` must be null or a pointer returned by this library and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn ec_error_free(error: *mut EcError) {
    if !error.is_null() {
        drop(Box::from_raw(error));
    }
}
