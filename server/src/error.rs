//! HTTP mapping for request failures.
//!
//! Every failure on this API is a client-input error: validation errors from
//! the evaluator and query strings axum cannot decode. Both answer 400 with
//! an `{"error": ...}` body.

use arith_core::{EvalError, ErrorResponse};
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("Malformed query: {0}")]
    MalformedQuery(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Eval(_) | ServerError::MalformedQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::MalformedQuery(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
