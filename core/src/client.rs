//! Stateless request builder and response parser for the arithmetic API.
//!
//! # Design
//! `ArithmeticClient` holds only a `base_url`. Building a request and
//! parsing its response are separate calls; the caller executes the HTTP
//! round-trip in between, keeping the core deterministic and free of I/O.
//! The client does not pre-validate operands: the server owns validation,
//! and every `{"error": ...}` 400 comes back as `ApiError::Rejected`.

use crate::error::{ApiError, EvalError};
use crate::http::{HttpRequest, HttpResponse};
use crate::operation::Operation;
use crate::types::{ArithmeticRequest, ArithmeticResponse, ErrorResponse};

/// Synchronous, stateless client for `GET /arithmetic`.
#[derive(Debug, Clone)]
pub struct ArithmeticClient {
    base_url: String,
}

impl ArithmeticClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request from a possibly-partial query. Absent fields are
    /// left out of the query string entirely.
    pub fn build_request(&self, request: &ArithmeticRequest) -> HttpRequest {
        let query = [
            ("operation", request.operation.as_deref()),
            ("operand1", request.operand1.as_deref()),
            ("operand2", request.operand2.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{key}={}", urlencoding::encode(v))))
        .collect::<Vec<_>>()
        .join("&");

        let path = if query.is_empty() {
            format!("{}/arithmetic", self.base_url)
        } else {
            format!("{}/arithmetic?{query}", self.base_url)
        };

        HttpRequest {
            path,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Build a request from raw field text, passed through verbatim.
    pub fn build_evaluate(&self, operation: &str, operand1: &str, operand2: &str) -> HttpRequest {
        self.build_request(&ArithmeticRequest::new(operation, operand1, operand2))
    }

    /// Build a request for `operand1 <operation> operand2`.
    ///
    /// Operands are written with `f64`'s `Display`, so a NaN operand goes
    /// out as `NaN` and is rejected by the server like any other NaN text.
    pub fn build_calculate(&self, operand1: f64, operand2: f64, operation: Operation) -> HttpRequest {
        self.build_evaluate(
            operation.name(),
            &operand1.to_string(),
            &operand2.to_string(),
        )
    }

    /// Like `build_calculate`, with the operation given as an operator
    /// symbol (`+ - * / ^`).
    pub fn build_calculate_symbol(
        &self,
        operand1: f64,
        operand2: f64,
        symbol: &str,
    ) -> Result<HttpRequest, ApiError> {
        let operation = Operation::from_symbol(symbol)
            .ok_or_else(|| ApiError::UnsupportedOperator(symbol.to_string()))?;
        Ok(self.build_calculate(operand1, operand2, operation))
    }

    /// Interpret the response to any `build_*` request.
    pub fn parse_calculate(&self, response: HttpResponse) -> Result<f64, ApiError> {
        match response.status {
            200 => {
                let body: ArithmeticResponse = serde_json::from_str(&response.body)
                    .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
                body.value().ok_or_else(|| {
                    ApiError::DeserializationError("response carries no result".to_string())
                })
            }
            400 => Err(rejection(response)),
            status => Err(ApiError::HttpError {
                status,
                body: response.body,
            }),
        }
    }
}

/// Map a 400 body to `Rejected`. A body that is not an `ErrorResponse`
/// stays raw in `HttpError`.
fn rejection(response: HttpResponse) -> ApiError {
    match serde_json::from_str::<ErrorResponse>(&response.body) {
        Ok(body) => ApiError::Rejected {
            kind: EvalError::from_message(&body.error),
            message: body.error,
        },
        Err(_) => ApiError::HttpError {
            status: response.status,
            body: response.body,
        },
    }
}
