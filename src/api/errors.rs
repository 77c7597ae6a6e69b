//! Error taxonomy for backend calls.
//!
//! Three families matter to callers: validation failures never leave the
//! client, business rejections carry a server message shown verbatim, and
//! transport failures collapse into one generic connectivity message with
//! the cause logged for diagnostics.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 2xx with `success: false`; the message is user-facing as-is.
    #[error("{0}")]
    Business(String),

    /// Non-2xx response from the backend.
    #[error("server returned HTTP {status} for {endpoint}")]
    Http { status: u16, endpoint: String },

    /// Connection, timeout or response-decoding failure.
    #[error("could not reach the server: {0}")]
    Transport(#[from] reqwest::Error),

    /// No usable bearer token could be resolved.
    #[error(
        "API token not found. Set SELLERDESK_API_TOKEN or add `token` to the \
         [api] section of sellerdesk.toml"
    )]
    TokenNotFound,

    /// A request body could not be assembled.
    #[error("invalid request payload: {0}")]
    Payload(String),
}

impl ApiError {
    pub fn is_business(&self) -> bool {
        matches!(self, ApiError::Business(_))
    }

    /// Text fit for the console. Business messages pass through verbatim;
    /// everything transport-shaped collapses into one generic line while the
    /// detail goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Business(msg) => msg.clone(),
            ApiError::TokenNotFound | ApiError::Payload(_) => self.to_string(),
            ApiError::Http { .. } | ApiError::Transport(_) => {
                tracing::warn!(error = %self, "request failed");
                "Cannot reach the server right now. Please try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_message_passes_through_verbatim() {
        let err = ApiError::Business("Shop name already taken".to_string());
        assert_eq!(err.user_message(), "Shop name already taken");
    }

    #[test]
    fn http_error_collapses_to_generic_message() {
        let err = ApiError::Http {
            status: 502,
            endpoint: "/seller-requests".to_string(),
        };
        assert!(err.user_message().contains("Cannot reach the server"));
    }
}
