//! Static file serving module
//!
//! Translates URL paths to files under the served root and builds the
//! responses, including index resolution, conditional requests, and
//! single-range serving.

use crate::handler::router::RequestContext;
use crate::http::{self, etag, mime, range::RangeParseResult};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path};
use tokio::fs;

/// File served for directory requests.
const INDEX_FILE: &str = "index.html";

/// Serve one request against the root. Every failure mode is a response.
pub async fn serve(ctx: &RequestContext<'_>, served_root: &Path) -> Response<Full<Bytes>> {
    match load(served_root, ctx.path).await {
        Some((content, content_type)) => build_file_response(&content, content_type, ctx),
        None => http::build_404_response(),
    }
}

/// Resolve a URL path to a file under the root and read it.
///
/// Returns `None` for anything that should be answered 404: a miss, a
/// directory without an index file, a refused traversal, or a root that
/// does not exist (the root is only checked here, never at startup).
async fn load(served_root: &Path, url_path: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = url_path.trim_start_matches('/');

    // Refuse parent-dir segments before touching the filesystem.
    if has_parent_component(relative) {
        logger::log_warning(&format!("Path traversal attempt blocked: {url_path}"));
        return None;
    }

    let root_canonical = match served_root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Served directory not found or inaccessible '{}': {e}",
                served_root.display()
            ));
            return None;
        }
    };

    let mut file_path = served_root.join(relative);

    // Directory requests (including "/" and trailing-slash paths) resolve
    // to the index file inside that directory.
    if relative.is_empty() || relative.ends_with('/') || file_path.is_dir() {
        file_path = file_path.join(INDEX_FILE);
    }

    // A miss is common; not worth logging.
    let Ok(file_canonical) = file_path.canonicalize() else {
        return None;
    };

    // Canonical form must stay under the root (covers symlinks too).
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path escape blocked: {url_path} -> {}",
            file_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_canonical.display()
            ));
            return None;
        }
    };

    let content_type =
        mime::content_type_for(file_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

fn has_parent_component(relative: &str) -> bool {
    Path::new(relative)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
}

/// Build the response for a loaded file: 304 on a matching validator,
/// 206/416 for range requests, plain 200 otherwise. HEAD carries the
/// same headers with an empty body.
fn build_file_response(
    data: &[u8],
    content_type: &'static str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = etag::generate_etag(data);
    let total_size = data.len();

    if etag::matches(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    match http::parse_range_header(ctx.range_header.as_deref(), total_size) {
        RangeParseResult::Valid(range) => {
            let start = range.start;
            let end = range.end_position(total_size);

            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(data[start..=end].to_vec())
            };

            http::response::build_partial_response(body, content_type, &etag, start, end, total_size)
        }
        RangeParseResult::NotSatisfiable => http::build_416_response(total_size),
        RangeParseResult::None => {
            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(data.to_owned())
            };

            http::response::build_ok_response(body, content_type, &etag, total_size)
        }
    }
}
