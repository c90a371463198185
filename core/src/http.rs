//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network; the caller (host) executes the actual I/O.
//!
//! Every arithmetic call is a `GET` with its inputs in the query string, so
//! a request carries no method or body. A response is read from its status
//! and body alone. All fields use owned types so values can cross FFI
//! boundaries without lifetime concerns.

/// An HTTP `GET` request described as plain data.
///
/// Built by `ArithmeticClient::build_*` methods. `path` is the full URL,
/// query string included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub path: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `ArithmeticClient::parse_calculate`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
