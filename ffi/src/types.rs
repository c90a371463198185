//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! enums with explicit discriminants. Conversions live here to keep `lib.rs`
//! focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use arith_core::{ApiError, EvalError};

/// Opaque handle to an `ArithmeticClient`. C callers receive a pointer to
/// this and pass it back into every client function.
pub struct FfiArithClient {
    pub(crate) inner: arith_core::ArithmeticClient,
}

/// Convert `s` into an owned C string, dropping any interior NUL bytes.
pub(crate) fn into_c_string(s: String) -> *mut c_char {
    let c = CString::new(s).unwrap_or_else(|err| {
        let mut bytes = err.into_vec();
        bytes.retain(|&b| b != 0);
        CString::new(bytes).unwrap_or_default()
    });
    c.into_raw()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP `GET` request described as C-compatible plain data.
///
/// Built by `arith_build_*` functions. The C caller executes the request
/// and passes the response back through `arith_parse_calculate`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: arith_core::HttpRequest) -> *mut Self {
        let path = into_c_string(req.path);

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: into_c_string(k),
                    value: into_c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            path,
            headers,
            headers_len,
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing a request and
/// passes a pointer to `arith_parse_calculate`. The FFI layer reads but
/// does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiArithResult`.
///
/// Codes 1-4 are the validation failures of the arithmetic endpoint, in the
/// order they are checked.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    MissingOperation = 1,
    UnknownOperation = 2,
    InvalidOperand1 = 3,
    InvalidOperand2 = 4,
    Http = 5,
    Deserialization = 6,
    UnsupportedOperator = 7,
    Panic = 8,
    NullArg = 9,
}

impl From<EvalError> for FfiErrorCode {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::MissingOperation => FfiErrorCode::MissingOperation,
            EvalError::UnknownOperation => FfiErrorCode::UnknownOperation,
            EvalError::InvalidOperand1 => FfiErrorCode::InvalidOperand1,
            EvalError::InvalidOperand2 => FfiErrorCode::InvalidOperand2,
        }
    }
}

/// A rejection that names no validation failure (e.g. a malformed query)
/// reports `Http`, as does any non-400 status.
impl From<&ApiError> for FfiErrorCode {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Rejected { kind: Some(eval), .. } => (*eval).into(),
            ApiError::Rejected { kind: None, .. } | ApiError::HttpError { .. } => {
                FfiErrorCode::Http
            }
            ApiError::DeserializationError(_) => FfiErrorCode::Deserialization,
            ApiError::UnsupportedOperator(_) => FfiErrorCode::UnsupportedOperator,
        }
    }
}

/// Result envelope for evaluation and parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `value`
/// holds the result, which may itself be NaN or infinite. On failure
/// `error_code` names the category, `error_message` is a human-readable C
/// string, and `value` is 0.
#[repr(C)]
pub struct FfiArithResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub value: f64,
}

impl FfiArithResult {
    pub(crate) fn ok(value: f64) -> *mut Self {
        Box::into_raw(Box::new(FfiArithResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            value,
        }))
    }

    fn error(error_code: FfiErrorCode, http_status: u16, message: String) -> *mut Self {
        Box::into_raw(Box::new(FfiArithResult {
            error_code,
            error_message: into_c_string(message),
            http_status,
            value: 0.0,
        }))
    }

    /// Build an error result from a local validation failure.
    pub(crate) fn from_eval_error(err: EvalError) -> *mut Self {
        Self::error(err.into(), 0, err.to_string())
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_api_error(err: ApiError) -> *mut Self {
        let http_status = match &err {
            ApiError::Rejected { .. } => 400,
            ApiError::HttpError { status, .. } => *status,
            ApiError::DeserializationError(_) | ApiError::UnsupportedOperator(_) => 0,
        };
        Self::error((&err).into(), http_status, err.to_string())
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::error(FfiErrorCode::NullArg, 0, format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(context: &str) -> *mut Self {
        Self::error(FfiErrorCode::Panic, 0, context.to_string())
    }
}
