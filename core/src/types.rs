//! Wire DTOs for the `/arithmetic` endpoint.
//!
//! # Design
//! JSON has no encoding for NaN or the infinities, so a non-finite result is
//! sent as `"result": null` plus a `"special"` sidecar naming the value.
//! Finite results are plain numbers, with negative zero written as `0`.
//! The server and the client share these types; the integration tests catch
//! any drift between what one writes and the other reads.

use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::evaluate::{self, Calculation};

/// The decoded query of an arithmetic call. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand2: Option<String>,
}

impl ArithmeticRequest {
    pub fn new(operation: &str, operand1: &str, operand2: &str) -> Self {
        Self {
            operation: Some(operation.to_string()),
            operand1: Some(operand1.to_string()),
            operand2: Some(operand2.to_string()),
        }
    }

    pub fn validate(&self) -> Result<Calculation, EvalError> {
        evaluate::validate(
            self.operation.as_deref(),
            self.operand1.as_deref(),
            self.operand2.as_deref(),
        )
    }

    pub fn evaluate(&self) -> Result<f64, EvalError> {
        self.validate().map(|calc| calc.compute())
    }
}

/// A non-finite IEEE-754 value, named the way JavaScript prints it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialValue {
    #[serde(rename = "NaN")]
    NaN,
    #[serde(rename = "Infinity")]
    Infinity,
    #[serde(rename = "-Infinity")]
    NegInfinity,
}

impl SpecialValue {
    /// Classify `value`; `None` when it is finite.
    pub fn of(value: f64) -> Option<Self> {
        if value.is_nan() {
            Some(SpecialValue::NaN)
        } else if value == f64::INFINITY {
            Some(SpecialValue::Infinity)
        } else if value == f64::NEG_INFINITY {
            Some(SpecialValue::NegInfinity)
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        match self {
            SpecialValue::NaN => f64::NAN,
            SpecialValue::Infinity => f64::INFINITY,
            SpecialValue::NegInfinity => f64::NEG_INFINITY,
        }
    }
}

/// Body of a 200 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticResponse {
    pub result: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<SpecialValue>,
}

impl ArithmeticResponse {
    pub fn from_value(value: f64) -> Self {
        match SpecialValue::of(value) {
            Some(special) => Self {
                result: None,
                special: Some(special),
            },
            // Normalise -0 to 0 for output only.
            None if value == 0.0 => Self {
                result: Some(0.0),
                special: None,
            },
            None => Self {
                result: Some(value),
                special: None,
            },
        }
    }

    /// Reconstruct the computed value. The sidecar takes precedence over
    /// `result`; `None` means the body carried neither.
    pub fn value(&self) -> Option<f64> {
        match (self.special, self.result) {
            (Some(special), _) => Some(special.value()),
            (None, result) => result,
        }
    }
}

/// Body of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<EvalError> for ErrorResponse {
    fn from(err: EvalError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
