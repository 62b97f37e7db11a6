//! Request routing dispatch
//!
//! Entry point for HTTP request processing. Paths are matched in order:
//! an existing static asset wins, then the health check, then the SPA
//! fallback catches everything else.

use crate::config::Config;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessRecord};
use chrono::Local;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, StatusCode};
use serde::Serialize;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context carrying what the route handlers need
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Fixed health check payload, constructed fresh per request
#[derive(Serialize)]
struct HealthReply {
    status: &'static str,
    message: &'static str,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = match check_http_method(&method) {
        Some(resp) => resp,
        None => {
            let ctx = RequestContext {
                path: &path,
                is_head: method == Method::HEAD,
                if_none_match: req
                    .headers()
                    .get("if-none-match")
                    .and_then(|v| v.to_str().ok())
                    .map(ToString::to_string),
            };
            route_request(&ctx, &config).await
        }
    };

    if config.logging.access_log {
        let record = AccessRecord {
            remote_addr: remote_addr.to_string(),
            time: Local::now(),
            method: method.to_string(),
            path,
            status: response.status().as_u16(),
            body_bytes: usize::try_from(response.body().size_hint().exact().unwrap_or(0))
                .unwrap_or(usize::MAX),
            duration_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
        logger::log_access(&record, &config.logging.access_log_format);
    }

    Ok(response)
}

/// Gate on HTTP method: GET/HEAD proceed, OPTIONS answers, the rest get 405
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_method_not_allowed_response())
        }
    }
}

/// Dispatch a GET/HEAD request: static asset, health check, SPA fallback
pub async fn route_request(ctx: &RequestContext<'_>, config: &Config) -> Response<Full<Bytes>> {
    if let Some((content, content_type)) =
        static_files::resolve_asset(&config.static_files, ctx.path).await
    {
        return static_files::file_response(ctx, content, content_type);
    }

    if config.health.enabled && ctx.path == config.health.path {
        return health_response();
    }

    static_files::serve_fallback(&config.static_files, ctx).await
}

fn health_response() -> Response<Full<Bytes>> {
    http::json_response(
        StatusCode::OK,
        &HealthReply {
            status: "ok",
            message: "Nexus Backend is healthy",
        },
    )
}
