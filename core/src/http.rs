//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The crate
//! builds `HttpRequest` values and settles `HttpResponse` values without ever
//! touching the network — the caller (host) is responsible for executing the
//! actual I/O. This separation keeps the cache deterministic and easy to
//! test, and leaves transport concerns (timeouts, TLS, connection pooling)
//! entirely to the host.
//!
//! All fields use owned types (`String`, `Vec`) so values can be held across
//! an asynchronous round-trip without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_*` and `TodoCache::begin_*` methods. The
/// caller is responsible for executing this request against the network and
/// returning the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `TodoClient::parse_*` or `TodoCache::apply_*` methods. `status_text`
/// carries the reason phrase so transport errors can surface it alongside
/// the status code.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
