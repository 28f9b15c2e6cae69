use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Bad request error (required lead fields missing).
    BadRequest(String),
    /// The email relay answered but did not accept the lead.
    RelayRejected {
        /// Upstream HTTP status, set only when it was not 2xx.
        status: Option<u16>,
        /// Upstream JSON body, passed through to the caller.
        details: Value,
    },
    /// Transport, decoding or other internal failure. Never exposed to callers.
    InternalError(String),
    /// Error with context chain for better debugging.
    WithContext {
        /// The underlying source of the error.
        source: Box<AppError>,
        /// Additional context message.
        context: String,
    },
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::RelayRejected { status, details } => match status {
                Some(code) => write!(f, "Relay rejected lead ({}): {}", code, details),
                None => write!(f, "Relay rejected lead: {}", details),
            },
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            AppError::WithContext { source, context } => {
                write!(f, "{}: {}", context, source)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Validation failures become 400, everything else 500. Only relay
    /// rejections carry upstream details; internal failures are logged and
    /// answered with a generic message.
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Rejected submission: {}", msg);
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            AppError::RelayRejected { status, details } => {
                tracing::error!("Email relay error: {}", details);
                let mut body = json!({
                    "error": "Failed to send email",
                    "details": details,
                });
                if let Some(code) = status {
                    body["status"] = json!(code);
                }
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            AppError::WithContext { source, context } => {
                // Log full context chain for debugging
                tracing::error!("Error with context: {} -> {}", context, source);
                // Delegate to underlying error's response
                return (*source).into_response();
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    /// Converts a `reqwest::Error` into an `AppError`.
    fn from(err: reqwest::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON error: {}", err))
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `AppError` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T, AppError>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T, AppError> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(e),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(e),
            context: f(),
        })
    }
}

impl AppError {
    /// Strips any context wrappers and returns the underlying error.
    pub fn root(&self) -> &AppError {
        match self {
            AppError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_maps_to_400() {
        let response = AppError::BadRequest("Missing required fields".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Missing required fields" })
        );
    }

    #[tokio::test]
    async fn test_relay_rejected_passes_details_through() {
        let response = AppError::RelayRejected {
            status: Some(403),
            details: json!({ "success": false, "message": "Invalid access key" }),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to send email");
        assert_eq!(body["details"]["message"], "Invalid access key");
        assert_eq!(body["status"], 403);
    }

    #[tokio::test]
    async fn test_relay_rejected_without_status_omits_field() {
        let response = AppError::RelayRejected {
            status: None,
            details: json!({ "success": false }),
        }
        .into_response();
        let body = body_json(response).await;
        assert!(body.get("status").is_none());
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = Err::<(), _>(AppError::InternalError(
            "connection refused at 10.0.0.1".to_string(),
        ))
        .context("Relaying lead")
        .unwrap_err()
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Internal server error" })
        );
    }

    #[test]
    fn test_root_unwraps_context_chain() {
        let err: Result<(), AppError> = Err(AppError::BadRequest("x".to_string()));
        let err = err.context("inner").context("outer").unwrap_err();
        assert!(matches!(err.root(), AppError::BadRequest(_)));
        assert_eq!(err.to_string(), "outer: inner: Bad request: x");
    }
}
