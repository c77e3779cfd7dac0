// Request body decoding

use http_body_util::{BodyExt, Limited};
use hyper::body::Body;
use serde_json::Value;

use super::error::ApiError;

/// Collect at most `limit` bytes of `body` and parse them as JSON.
///
/// Any JSON value is accepted, including `{}` and non-object values; there
/// is no schema.
pub async fn read_json<B>(body: B, limit: usize, endpoint: &'static str) -> Result<Value, ApiError>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let collected = Limited::new(body, limit)
        .collect()
        .await
        .map_err(|e| ApiError::BodyRead {
            endpoint,
            reason: e.to_string(),
        })?
        .to_bytes();

    serde_json::from_slice(&collected).map_err(|source| ApiError::MalformedBody { endpoint, source })
}
