//! The arithmetic request handler: validate, then compute.
//!
//! # Design
//! Validation is fail-fast in a fixed order (operation, operand1, operand2)
//! and produces a `Calculation`, which is the only way to reach the compute
//! step. Once a `Calculation` exists the result is a plain `f64`; NaN and
//! the infinities are returned as values, not errors.

use crate::error::EvalError;
use crate::operand::parse_operand;
use crate::operation::Operation;

/// A request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    operation: Operation,
    operand1: f64,
    operand2: f64,
}

impl Calculation {
    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn operand1(&self) -> f64 {
        self.operand1
    }

    pub fn operand2(&self) -> f64 {
        self.operand2
    }

    pub fn compute(&self) -> f64 {
        self.operation.apply(self.operand1, self.operand2)
    }
}

/// Validate the three raw request fields.
///
/// The first failing check wins: a request with both an unknown operation
/// and a bad operand reports the operation.
pub fn validate(
    operation: Option<&str>,
    operand1: Option<&str>,
    operand2: Option<&str>,
) -> Result<Calculation, EvalError> {
    let operation: Operation = operation.ok_or(EvalError::MissingOperation)?.parse()?;
    let operand1 = operand1
        .and_then(parse_operand)
        .ok_or(EvalError::InvalidOperand1)?;
    let operand2 = operand2
        .and_then(parse_operand)
        .ok_or(EvalError::InvalidOperand2)?;

    Ok(Calculation {
        operation,
        operand1,
        operand2,
    })
}

/// Validate and compute in one step.
pub fn evaluate(
    operation: Option<&str>,
    operand1: Option<&str>,
    operand2: Option<&str>,
) -> Result<f64, EvalError> {
    validate(operation, operand1, operand2).map(|calc| calc.compute())
}
