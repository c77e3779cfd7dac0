// Admin dashboard endpoint

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Response, StatusCode};

use super::body::read_json;
use super::types::{ErrorBody, MessageBody, DASHBOARD_SNAPSHOT};
use crate::http::json_response;
use crate::logger;

pub const ENDPOINT: &str = "admin";

const DONE: MessageBody = MessageBody {
    message: "Action completed successfully",
};
const FAILED: ErrorBody = ErrorBody {
    error: "Failed to process action",
};

/// GET /api/admin
pub fn handle_get() -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &DASHBOARD_SNAPSHOT)
}

/// POST /api/admin
///
/// Logs the action and reports success. No action is applied: the snapshot
/// served by GET never changes.
pub async fn handle_post<B>(body: B, max_body_size: usize) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match read_json(body, max_body_size, ENDPOINT).await {
        Ok(action) => {
            logger::log_payload("ADMIN", "action", &action);
            json_response(StatusCode::OK, &DONE)
        }
        Err(e) => {
            logger::log_error(&e.to_string());
            json_response(StatusCode::INTERNAL_SERVER_ERROR, &FAILED)
        }
    }
}
