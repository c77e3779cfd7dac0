//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: route lookup, method checks,
//! body size limits, then dispatch to the API or sitemap handlers.

use chrono::Utc;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use crate::api::{admin, contact};
use crate::config::{AppState, SiteConfig};
use crate::http::{self, response::TEXT_CONTENT_TYPE, response::XML_CONTENT_TYPE};
use crate::logger;
use crate::sitemap;

const READ_ONLY_METHODS: &str = "GET, HEAD, OPTIONS";
const API_METHODS: &str = "GET, HEAD, POST, OPTIONS";

/// Paths the site answers on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Contact,
    Admin,
    Sitemap,
    Robots,
    Health,
}

impl Route {
    pub fn resolve(path: &str) -> Option<Self> {
        // A trailing slash resolves to the same route
        match path.trim_end_matches('/') {
            "/api/contact" => Some(Self::Contact),
            "/api/admin" => Some(Self::Admin),
            "/sitemap.xml" => Some(Self::Sitemap),
            "/robots.txt" => Some(Self::Robots),
            "/healthz" => Some(Self::Health),
            _ => None,
        }
    }

    /// Value of the `Allow` header for this route
    pub const fn allow(self) -> &'static str {
        match self {
            Self::Contact | Self::Admin => API_METHODS,
            Self::Sitemap | Self::Robots | Self::Health => READ_ONLY_METHODS,
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let is_head = *req.method() == Method::HEAD;
    let response = route_request(req, &state).await;

    let http_config = &state.config.http;
    Ok(http::finish_response(
        response,
        &http_config.server_name,
        http_config.enable_cors,
        is_head,
    ))
}

async fn route_request<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let Some(route) = Route::resolve(req.uri().path()) else {
        logger::log_debug(&format!("No route for {}", req.uri().path()));
        return http::build_404_response();
    };

    let method = req.method().clone();
    let max_body_size = state.config.http.max_body_size;
    let body_limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);

    match (&method, route) {
        (&Method::OPTIONS, _) => {
            http::build_options_response(route.allow(), state.config.http.enable_cors)
        }
        (&Method::GET | &Method::HEAD, Route::Contact) => contact::handle_get(),
        (&Method::GET | &Method::HEAD, Route::Admin) => admin::handle_get(),
        (&Method::POST, Route::Contact) => {
            if let Some(resp) = check_body_size(&req, max_body_size) {
                return resp;
            }
            contact::handle_post(req.into_body(), body_limit).await
        }
        (&Method::POST, Route::Admin) => {
            if let Some(resp) = check_body_size(&req, max_body_size) {
                return resp;
            }
            admin::handle_post(req.into_body(), body_limit).await
        }
        (&Method::GET | &Method::HEAD, Route::Sitemap) => serve_sitemap(&state.config.site),
        (&Method::GET | &Method::HEAD, Route::Robots) => http::build_body_response(
            StatusCode::OK,
            TEXT_CONTENT_TYPE,
            sitemap::render_robots(&state.config.site.base_url),
        ),
        (&Method::GET | &Method::HEAD, Route::Health) => {
            http::json_response(StatusCode::OK, &serde_json::json!({"status": "ok"}))
        }
        _ => {
            logger::log_warning(&format!(
                "Method not allowed: {method} {}",
                req.uri().path()
            ));
            http::build_405_response(route.allow())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get(hyper::header::CONTENT_LENGTH)?;
    let Ok(size_str) = content_length.to_str() else {
        logger::log_warning("Content-Length header contains non-ASCII characters");
        return None;
    };
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_warning(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Ok(_) => None,
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
    }
}

fn serve_sitemap(site: &SiteConfig) -> Response<Full<Bytes>> {
    let entries = sitemap::build_sitemap(
        &site.base_url,
        &site.static_paths,
        &site.service_slugs,
        Utc::now(),
    );
    logger::log_debug(&format!("Serving sitemap with {} entries", entries.len()));
    http::build_body_response(StatusCode::OK, XML_CONTENT_TYPE, sitemap::render_xml(&entries))
}
