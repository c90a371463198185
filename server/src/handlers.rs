//! Request handlers.

use arith_core::{ArithmeticRequest, ArithmeticResponse};
use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde_json::json;

use crate::error::ServerError;

/// `GET /arithmetic?operation=&operand1=&operand2=`
///
/// A computed NaN or infinity is a 200; only validation failures are 400s.
pub async fn arithmetic_handler(
    query: Result<Query<ArithmeticRequest>, QueryRejection>,
) -> Result<Json<ArithmeticResponse>, ServerError> {
    let Query(request) = query.inspect_err(|rejection| {
        tracing::info!(error = %rejection, "undecodable arithmetic query");
    })?;

    let calculation = request.validate().inspect_err(|err| {
        tracing::info!(
            error = %err,
            operation = request.operation.as_deref(),
            "rejected arithmetic request"
        );
    })?;

    let value = calculation.compute();
    tracing::debug!(
        operation = %calculation.operation(),
        operand1 = calculation.operand1(),
        operand2 = calculation.operand2(),
        value,
        "evaluated"
    );
    Ok(Json(ArithmeticResponse::from_value(value)))
}

/// `GET /health`
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
