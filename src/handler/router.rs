//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, header
//! extraction, and handoff to the static file facility.

use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;

/// Request context encapsulating what the file facility needs
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range_header: Option<String>,
}

/// Main entry point for HTTP request handling
///
/// Every outcome is an ordinary response; nothing here can fail the
/// connection, let alone the process.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    served_root: Arc<PathBuf>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if let Some(resp) = check_http_method(req.method()) {
        return Ok(resp);
    }

    let ctx = RequestContext {
        path: req.uri().path(),
        is_head: *req.method() == Method::HEAD,
        if_none_match: header_value(&req, "if-none-match"),
        range_header: header_value(&req, "range"),
    };

    Ok(static_files::serve(&ctx, &served_root).await)
}

/// Only GET and HEAD proceed; anything else is answered 405.
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
