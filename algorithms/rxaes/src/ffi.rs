//! C-API Bindings
//!
//! Exposes rxaes to C/C++ via FFI with pointer safety and panic boundaries.
//!
//! Every entry point returns:
//! - `0`: Success
//! - `-1`: Null pointer
//! - `-2`: Panic
//! - `-3`: Length is not a multiple of 64 (nothing was written)

#![allow(unsafe_code)]

use crate::kernels::constants::{DIGEST_SIZE, KEY_SCHEDULE_SIZE};
use crate::oneshot;
use crate::types::{KeySchedule, LengthError, State};

use std::ffi::{c_char, CString};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::slice;
use std::sync::OnceLock;

// =============================================================================
// RETURN CODES
// =============================================================================

const OK: i32 = 0;
const NULL_POINTER: i32 = -1;
const PANIC: i32 = -2;
const BAD_LENGTH: i32 = -3;

fn status(result: std::thread::Result<Result<(), LengthError>>) -> i32 {
    match result {
        Ok(Ok(())) => OK,
        Ok(Err(_)) => BAD_LENGTH,
        Err(_) => PANIC,
    }
}

/// Build a slice, accepting a null pointer when `len == 0`.
unsafe fn input_slice<'a>(data: *const u8, len: usize) -> &'a [u8] {
    if len == 0 {
        &[]
    } else {
        slice::from_raw_parts(data, len)
    }
}

/// Mutable counterpart of [`input_slice`].
unsafe fn output_slice<'a>(data: *mut u8, len: usize) -> &'a mut [u8] {
    if len == 0 {
        &mut []
    } else {
        slice::from_raw_parts_mut(data, len)
    }
}

// =============================================================================
// HASHING
// =============================================================================

/// Compute the 64-byte digest of `input`.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for 64 writable bytes
#[no_mangle]
pub unsafe extern "C" fn rxaes_hash(
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u8,
) -> i32 {
    if (input_ptr.is_null() && input_len != 0) || output_ptr.is_null() {
        return NULL_POINTER;
    }

    let result = panic::catch_unwind(|| -> Result<(), LengthError> {
        let input = input_slice(input_ptr, input_len);
        let digest = oneshot::hash(input)?;
        ptr::copy_nonoverlapping(digest.as_ptr(), output_ptr, DIGEST_SIZE);
        Ok(())
    });

    status(result)
}

// =============================================================================
// GENERATORS
// =============================================================================

/// Fill `output_len` bytes with the one-round stream, advancing the state.
///
/// # Safety
/// - `state_ptr` must be valid for 64 readable and writable bytes
/// - `output_ptr` must be valid for `output_len` writable bytes (may be null if `output_len == 0`)
#[no_mangle]
pub unsafe extern "C" fn rxaes_fill_1r(
    state_ptr: *mut u8,
    output_ptr: *mut u8,
    output_len: usize,
) -> i32 {
    if state_ptr.is_null() || (output_ptr.is_null() && output_len != 0) {
        return NULL_POINTER;
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let state = &mut *state_ptr.cast::<State>();
        let output = output_slice(output_ptr, output_len);
        oneshot::fill_1r(state, output)
    }));

    status(result)
}

/// Fill `output_len` bytes with the four-round stream, advancing the state.
///
/// # Safety
/// - `state_ptr` must be valid for 64 readable and writable bytes
/// - `output_ptr` must be valid for `output_len` writable bytes (may be null if `output_len == 0`)
/// - `keys_ptr` must be valid for 128 readable bytes
#[no_mangle]
pub unsafe extern "C" fn rxaes_fill_4r(
    state_ptr: *mut u8,
    output_ptr: *mut u8,
    output_len: usize,
    keys_ptr: *const u8,
) -> i32 {
    if state_ptr.is_null() || keys_ptr.is_null() || (output_ptr.is_null() && output_len != 0) {
        return NULL_POINTER;
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let state = &mut *state_ptr.cast::<State>();
        let keys = KeySchedule::from_bytes(&*keys_ptr.cast::<[u8; KEY_SCHEDULE_SIZE]>());
        let output = output_slice(output_ptr, output_len);
        oneshot::fill_4r(state, output, &keys)
    }));

    status(result)
}

// =============================================================================
// FUSED SWEEP
// =============================================================================

/// Hash a scratchpad and overwrite it with the one-round stream.
///
/// # Safety
/// - `buffer_ptr` must be valid for `buffer_len` readable and writable bytes (may be null if `buffer_len == 0`)
/// - `hash_ptr` must be valid for 64 writable bytes
/// - `fill_state_ptr` must be valid for 64 readable and writable bytes
#[no_mangle]
pub unsafe extern "C" fn rxaes_hash_and_fill(
    buffer_ptr: *mut u8,
    buffer_len: usize,
    hash_ptr: *mut u8,
    fill_state_ptr: *mut u8,
) -> i32 {
    if hash_ptr.is_null()
        || fill_state_ptr.is_null()
        || (buffer_ptr.is_null() && buffer_len != 0)
    {
        return NULL_POINTER;
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| -> Result<(), LengthError> {
        let buffer = output_slice(buffer_ptr, buffer_len);
        let fill_state = &mut *fill_state_ptr.cast::<State>();
        let digest = oneshot::hash_and_fill(buffer, fill_state)?;
        ptr::copy_nonoverlapping(digest.as_ptr(), hash_ptr, DIGEST_SIZE);
        Ok(())
    }));

    status(result)
}

// =============================================================================
// INTROSPECTION
// =============================================================================

/// Get the name of the active backend.
///
/// # Returns
/// A pointer to a static, null-terminated C string (e.g. `"AES-NI"`). Must NOT be freed by the caller.
///
/// # Safety
/// The returned pointer is always valid and statically allocated.
#[no_mangle]
pub unsafe extern "C" fn rxaes_active_backend() -> *const c_char {
    static NAME: OnceLock<CString> = OnceLock::new();
    NAME.get_or_init(|| CString::new(crate::active_backend()).unwrap_or_default())
        .as_ptr()
}
