// API error types

use thiserror::Error;

/// Failure to turn an inbound request body into a JSON payload.
///
/// Both variants are reported to clients as the endpoint's fixed 500 message;
/// the detail only reaches the error log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{endpoint}: failed to read request body: {reason}")]
    BodyRead {
        endpoint: &'static str,
        reason: String,
    },

    #[error("{endpoint}: malformed request body: {source}")]
    MalformedBody {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::BodyRead { endpoint, .. } | Self::MalformedBody { endpoint, .. } => *endpoint,
        }
    }
}
