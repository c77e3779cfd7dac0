// Contact form submission endpoint

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Response, StatusCode};

use super::body::read_json;
use super::types::{ErrorBody, MessageBody};
use crate::http::json_response;
use crate::logger;

pub const ENDPOINT: &str = "contact";

const SENT: MessageBody = MessageBody {
    message: "Message sent successfully!",
};
const FAILED: ErrorBody = ErrorBody {
    error: "Failed to send message",
};

/// GET /api/contact
pub fn handle_get() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &MessageBody {
            message: "Contact API endpoint",
        },
    )
}

/// POST /api/contact
///
/// Any JSON body counts as a delivered message. The payload is written to
/// the log and dropped; nothing is stored or sent on.
pub async fn handle_post<B>(body: B, max_body_size: usize) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match read_json(body, max_body_size, ENDPOINT).await {
        Ok(payload) => {
            logger::log_payload("CONTACT", "submission", &payload);
            json_response(StatusCode::OK, &SENT)
        }
        Err(e) => {
            logger::log_error(&e.to_string());
            json_response(StatusCode::INTERNAL_SERVER_ERROR, &FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn post(raw: &'static str) -> Response<Full<Bytes>> {
        handle_post(Full::new(Bytes::from_static(raw.as_bytes())), 1024).await
    }

    #[tokio::test]
    async fn test_submission_accepted() {
        let resp = post(r#"{"name":"John","email":"john@x.com","service":"NDT"}"#).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({"message": "Message sent successfully!"})
        );
    }

    #[tokio::test]
    async fn test_missing_fields_still_accepted() {
        let resp = post("{}").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["message"], "Message sent successfully!");
    }

    #[tokio::test]
    async fn test_malformed_body_is_500() {
        let resp = post("name=John&email=john@x.com").await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({"error": "Failed to send message"})
        );
    }

    #[tokio::test]
    async fn test_get_identifies_endpoint() {
        let resp = handle_get();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["message"], "Contact API endpoint");
    }
}
