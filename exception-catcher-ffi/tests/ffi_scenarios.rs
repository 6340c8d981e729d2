// Exercises the C ABI the way a C caller would
use exception_catcher::{raise, ErrorCode, ERROR_DOMAIN};
use exception_catcher_ffi::{
    ec_error_code, ec_error_domain, ec_error_free, ec_error_message,
    ec_perform_block_catching_exception, EcError,
};
use std::ffi::{c_void, CStr};
use std::ptr;

unsafe extern "C-unwind" fn add_one(context: *mut c_void) {
    let counter = &mut *(context as *mut i32);
    *counter += 1;
}

unsafe extern "C-unwind" fn raise_bad_pdf(_context: *mut c_void) {
    raise("BadPDF", "missing xref");
}

unsafe extern "C-unwind" fn raise_without_reason(_context: *mut c_void) {
    raise("BadPDF", "");
}

fn message_of(error: *const EcError) -> String {
    unsafe { CStr::from_ptr(ec_error_message(error)) }
        .to_string_lossy()
        .into_owned()
}

#[test]
fn successful_block_leaves_error_untouched() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut counter = 1_i32;

    // Seed the slot with a real error object so any write is observable
    let mut error: *mut EcError = ptr::null_mut();
    assert!(!unsafe { ec_perform_block_catching_exception(None, ptr::null_mut(), &mut error) });
    assert!(!error.is_null());
    let seeded = error;

    let ok = unsafe {
        ec_perform_block_catching_exception(
            Some(add_one),
            &mut counter as *mut i32 as *mut c_void,
            &mut error,
        )
    };

    assert!(ok);
    assert_eq!(counter, 2);
    assert_eq!(error, seeded);
    unsafe {
        assert_eq!(ec_error_code(error), ErrorCode::InvalidArgument.as_i64());
        ec_error_free(error);
    }
}

#[test]
fn raised_exception_fills_error() -> anyhow::Result<()> {
    let mut error: *mut EcError = ptr::null_mut();

    let ok = unsafe {
        ec_perform_block_catching_exception(Some(raise_bad_pdf), ptr::null_mut(), &mut error)
    };

    assert!(!ok);
    assert!(!error.is_null());
    unsafe {
        assert_eq!(ec_error_code(error), ErrorCode::ExceptionCaught.as_i64());
        assert_eq!(CStr::from_ptr(ec_error_domain(error)).to_str()?, ERROR_DOMAIN);
    }
    let message = message_of(error);
    assert!(message.contains("BadPDF"));
    assert!(message.contains("missing xref"));

    unsafe { ec_error_free(error) };
    Ok(())
}

#[test]
fn empty_reason_falls_back_to_name() {
    let mut error: *mut EcError = ptr::null_mut();

    let ok = unsafe {
        ec_perform_block_catching_exception(Some(raise_without_reason), ptr::null_mut(), &mut error)
    };

    assert!(!ok);
    assert_eq!(message_of(error), "BadPDF");
    unsafe { ec_error_free(error) };
}

#[test]
fn null_error_slot_does_not_crash() {
    let ok = unsafe {
        ec_perform_block_catching_exception(Some(raise_bad_pdf), ptr::null_mut(), ptr::null_mut())
    };
    assert!(!ok);
}

#[test]
fn null_block_is_invalid_argument() {
    let mut error: *mut EcError = ptr::null_mut();

    let ok = unsafe { ec_perform_block_catching_exception(None, ptr::null_mut(), &mut error) };

    assert!(!ok);
    unsafe {
        assert_eq!(ec_error_code(error), ErrorCode::InvalidArgument.as_i64());
        assert_eq!((*error).inner().code, ErrorCode::InvalidArgument);
        ec_error_free(error);
    }
}
