//! Error types for arithmetic evaluation and the API client.
//!
//! # Design
//! `EvalError` is the whole failure taxonomy of the endpoint. Its `Display`
//! strings are the wire contract: clients match on them, so they must not
//! change. `ApiError` covers what can go wrong on the client side of the
//! round-trip. A server rejection keeps the server's message and, when it
//! is one of the validation failures, the matching `EvalError`.

use thiserror::Error;

/// Validation failures, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The `operation` field was absent.
    #[error("Unspecified operation")]
    MissingOperation,

    /// The `operation` field named no known operation.
    #[error("Invalid operation")]
    UnknownOperation,

    /// `operand1` was absent or not a finite numeral.
    #[error("Invalid operand1")]
    InvalidOperand1,

    /// `operand2` was absent or not a finite numeral.
    #[error("Invalid operand2")]
    InvalidOperand2,
}

impl EvalError {
    pub const ALL: [EvalError; 4] = [
        EvalError::MissingOperation,
        EvalError::UnknownOperation,
        EvalError::InvalidOperand1,
        EvalError::InvalidOperand2,
    ];

    /// Recover the variant from an error message returned by the server.
    ///
    /// Matches by substring so a server that decorates its messages still
    /// maps to the right variant.
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|e| message.contains(&e.to_string()))
    }
}

/// Errors returned by `ArithmeticClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 400 with an `{"error": ...}` body. `kind` is set
    /// when the message names a validation failure.
    #[error("request rejected: {message}")]
    Rejected {
        message: String,
        kind: Option<EvalError>,
    },

    /// The server returned a status the client does not interpret.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The operator symbol has no matching operation.
    #[error("unsupported operator: {0:?}")]
    UnsupportedOperator(String),
}
