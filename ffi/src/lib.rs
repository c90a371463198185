//! C-ABI wrapper around `arith-core`.
//!
//! # Overview
//! Exposes the arithmetic client and evaluator through `extern "C"`
//! functions so any language with a C FFI can build requests, parse
//! responses, or evaluate locally without linking Rust's async runtime.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `arith_build_*` / `arith_parse_calculate` mirror the core client 1:1.
//! - A single `FfiArithResult` envelope carries either a value or an error
//!   code plus message.
//! - The C caller owns all returned pointers and must call the matching
//!   `arith_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use arith_core::{ArithmeticRequest, HttpResponse};

use types::*;

/// Read a nullable C string. Null maps to `None`; invalid UTF-8 maps to an
/// empty string, which the evaluator rejects like any other non-numeral.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
unsafe fn opt_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(ptr) }.to_str().unwrap_or("").to_string())
    }
}

/// Read a C string that must be present and valid UTF-8.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
unsafe fn utf8_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok().map(str::to_string)
}

/// Store `code` through a nullable out-pointer.
///
/// # Safety
/// `out` must be null or valid for a write.
unsafe fn store_code(out: *mut FfiErrorCode, code: FfiErrorCode) {
    if !out.is_null() {
        unsafe { *out = code };
    }
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `ArithmeticClient` bound to `base_url`.
///
/// Returns null if `base_url` is null, is not valid UTF-8, or if an
/// internal panic occurs.
/// The caller must free the returned pointer with `arith_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn arith_client_new(base_url: *const c_char) -> *mut FfiArithClient {
    catch_unwind(|| {
        let Some(url) = (unsafe { utf8_string(base_url) }) else {
            return std::ptr::null_mut();
        };
        let client = arith_core::ArithmeticClient::new(&url);
        Box::into_raw(Box::new(FfiArithClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `arith_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn arith_client_free(client: *mut FfiArithClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build a request from raw field text. Any of `operation`, `operand1`,
/// `operand2` may be null to leave that field out of the query.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `arith_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn arith_build_evaluate(
    client: *const FfiArithClient,
    operation: *const c_char,
    operand1: *const c_char,
    operand2: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let request = ArithmeticRequest {
            operation: unsafe { opt_string(operation) },
            operand1: unsafe { opt_string(operand1) },
            operand2: unsafe { opt_string(operand2) },
        };
        FfiHttpRequest::from_core(client.inner.build_request(&request))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build a request for `operand1 <symbol> operand2`, where `symbol` is one
/// of `+ - * / ^`.
///
/// Returns null on failure. When `error_out` is non-null it receives `Ok`
/// on success, `NullArg` if `client` or `symbol` is null,
/// `UnsupportedOperator` for any other symbol, or `Panic`.
#[unsafe(no_mangle)]
pub extern "C" fn arith_build_calculate(
    client: *const FfiArithClient,
    operand1: f64,
    operand2: f64,
    symbol: *const c_char,
    error_out: *mut FfiErrorCode,
) -> *mut FfiHttpRequest {
    let built = catch_unwind(|| {
        if client.is_null() {
            return Err(FfiErrorCode::NullArg);
        }
        let Some(symbol) = (unsafe { opt_string(symbol) }) else {
            return Err(FfiErrorCode::NullArg);
        };
        let client = unsafe { &*client };
        client
            .inner
            .build_calculate_symbol(operand1, operand2, &symbol)
            .map(FfiHttpRequest::from_core)
            .map_err(|e| FfiErrorCode::from(&e))
    })
    .unwrap_or(Err(FfiErrorCode::Panic));

    match built {
        Ok(req) => {
            unsafe { store_code(error_out, FfiErrorCode::Ok) };
            req
        }
        Err(code) => {
            unsafe { store_code(error_out, code) };
            std::ptr::null_mut()
        }
    }
}

// ---------------------------------------------------------------------------
// Parse / evaluate functions
// ---------------------------------------------------------------------------

fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    HttpResponse {
        status: resp.status,
        body: unsafe { opt_string(resp.body) }.unwrap_or_default(),
    }
}

/// Parse the response to any `arith_build_*` request.
///
/// A server rejection is reported with `http_status = 400` and the matching
/// validation error code, or `Http` when the server named none.
#[unsafe(no_mangle)]
pub extern "C" fn arith_parse_calculate(
    client: *const FfiArithClient,
    response: *const FfiHttpResponse,
) -> *mut FfiArithResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiArithResult::null_arg("client");
        }
        if response.is_null() {
            return FfiArithResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_calculate(ffi_response_to_core(resp)) {
            Ok(value) => FfiArithResult::ok(value),
            Err(e) => FfiArithResult::from_api_error(e),
        }
    })
    .unwrap_or_else(|_| FfiArithResult::panic("panic in arith_parse_calculate"))
}

/// Evaluate locally, without a server. Null arguments count as absent
/// fields, so they produce the same errors the endpoint would.
#[unsafe(no_mangle)]
pub extern "C" fn arith_evaluate(
    operation: *const c_char,
    operand1: *const c_char,
    operand2: *const c_char,
) -> *mut FfiArithResult {
    catch_unwind(|| {
        let request = ArithmeticRequest {
            operation: unsafe { opt_string(operation) },
            operand1: unsafe { opt_string(operand1) },
            operand2: unsafe { opt_string(operand2) },
        };
        match request.evaluate() {
            Ok(value) => FfiArithResult::ok(value),
            Err(e) => FfiArithResult::from_eval_error(e),
        }
    })
    .unwrap_or_else(|_| FfiArithResult::panic("panic in arith_evaluate"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `arith_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn arith_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        if !req.path.is_null() {
            drop(unsafe { CString::from_raw(req.path) });
        }
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                if !h.key.is_null() {
                    drop(unsafe { CString::from_raw(h.key) });
                }
                if !h.value.is_null() {
                    drop(unsafe { CString::from_raw(h.value) });
                }
            }
        }
    });
}

/// Free an `FfiArithResult` returned by `arith_parse_calculate` or
/// `arith_evaluate`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn arith_free_result(result: *mut FfiArithResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn arith_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
