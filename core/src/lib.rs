//! Arithmetic evaluation core and stateless API client.
//!
//! # Overview
//! Holds the request-validation and computation contract behind the
//! `/arithmetic` endpoint, the JSON wire types shared with the server, and an
//! `ArithmeticClient` that builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network (host-does-IO pattern).
//!
//! # Design
//! - `evaluate` is a pure function: parse, validate in a fixed order, compute.
//! - Operand text `"NaN"` is an input error; a computed NaN is a result.
//!   The two never share a code path.
//! - `ArithmeticClient` is stateless. It holds only `base_url`.
//! - Types use owned `String` fields to simplify FFI mapping.

pub mod client;
pub mod error;
pub mod evaluate;
pub mod http;
pub mod operand;
pub mod operation;
pub mod types;

pub use client::ArithmeticClient;
pub use error::{ApiError, EvalError};
pub use evaluate::{evaluate, validate, Calculation};
pub use http::{HttpRequest, HttpResponse};
pub use operand::parse_operand;
pub use operation::Operation;
pub use types::{ArithmeticRequest, ArithmeticResponse, ErrorResponse, SpecialValue};
