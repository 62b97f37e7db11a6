//! Static asset serving
//!
//! Resolves request paths to files under the configured asset root and
//! builds their responses, including the SPA fallback to the entry document.

use crate::config::StaticFilesConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, conditional, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Resolve a request path to an asset under the root
///
/// Returns the file bytes and Content-Type, or `None` when no file matches
/// (the caller decides what an unmatched path means). Directory paths
/// resolve to the directory's index file. Paths escaping the root via `..`
/// or symlinks are refused.
pub async fn resolve_asset(
    cfg: &StaticFilesConfig,
    request_path: &str,
) -> Option<(Vec<u8>, &'static str)> {
    let relative = request_path.trim_start_matches('/');

    let root = match Path::new(&cfg.root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!("Asset root '{}' not accessible: {e}", cfg.root));
            return None;
        }
    };

    let mut candidate = root.join(relative);
    if relative.is_empty() || relative.ends_with('/') || candidate.is_dir() {
        candidate = candidate.join(&cfg.index_file);
    }

    // Canonicalization resolves symlinks, so the prefix check below also
    // covers links pointing outside the root
    let resolved = candidate.canonicalize().ok()?;
    if !resolved.starts_with(&root) {
        logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
        return None;
    }
    if !resolved.is_file() {
        return None;
    }

    let content = match fs::read(&resolved).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read '{}': {e}", resolved.display()));
            return None;
        }
    };

    let content_type = mime::content_type_for(resolved.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Build the response for resolved file content
///
/// Handles conditional revalidation (304) and HEAD's empty body.
pub fn file_response(
    ctx: &RequestContext<'_>,
    content: Vec<u8>,
    content_type: &str,
) -> Response<Full<Bytes>> {
    let etag = conditional::etag_for(&content);
    if conditional::revalidates(ctx.if_none_match.as_deref(), &etag) {
        return http::build_not_modified_response(&etag);
    }
    http::build_file_response(Bytes::from(content), content_type, &etag, ctx.is_head)
}

/// Serve the entry document for an unmatched route (SPA fallback)
///
/// Client-side routing owns every path the filesystem doesn't. A missing
/// entry document is the one case that still surfaces a 404.
pub async fn serve_fallback(
    cfg: &StaticFilesConfig,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let index_path = Path::new(&cfg.root).join(&cfg.index_file);
    match fs::read(&index_path).await {
        Ok(content) => {
            let content_type =
                mime::content_type_for(index_path.extension().and_then(|e| e.to_str()));
            file_response(ctx, content, content_type)
        }
        Err(e) => {
            logger::log_warning(&format!(
                "Entry document '{}' not readable: {e}",
                index_path.display()
            ));
            http::build_not_found_response()
        }
    }
}
