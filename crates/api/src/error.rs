//! API error types with HTTP response mapping.
//!
//! Every error renders as a JSON object with a single `detail` field: a
//! message string, or a list of [`ValidationDetail`] entries for 422s.

use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use item_store::ItemStoreError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// One entry of a 422 response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationDetail {
    /// Where the offending input lives, e.g. `["body"]` or `["path", "item_id"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationDetail {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// Error body with a plain message, used for documentation.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// 422 error body, used for documentation.
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationDetail>,
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),
    /// Request path or body failed to match the expected shape.
    #[error("validation failed: {0:?}")]
    Validation(Vec<ValidationDetail>),
    /// The path exists but not for this HTTP method.
    #[error("method not allowed")]
    MethodNotAllowed,
    /// Internal server error. The message is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

const ITEM_NOT_FOUND: &str = "Item not found";
const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({ "detail": msg })),
            ApiError::Validation(details) => {
                metrics::counter!("api_validation_failures_total").increment(1);
                tracing::debug!(?details, "request validation failed");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    serde_json::json!({ "detail": details }),
                )
            }
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                serde_json::json!({ "detail": "Method Not Allowed" }),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "detail": INTERNAL_SERVER_ERROR }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<ItemStoreError> for ApiError {
    fn from(err: ItemStoreError) -> Self {
        match err {
            ItemStoreError::NotFound(_) => ApiError::NotFound(ITEM_NOT_FOUND.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let msg = rejection.body_text();
        let kind = match &rejection {
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "model_attributes_type",
            JsonRejection::JsonDataError(_) if msg.contains("missing field") => "missing",
            JsonRejection::JsonDataError(_) if msg.contains("expected a valid integer") => {
                "int_parsing"
            }
            _ => "value_error",
        };
        ApiError::Validation(vec![ValidationDetail::new(&["body"], msg, kind)])
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                ApiError::Validation(vec![ValidationDetail::new(
                    &["path", "item_id"],
                    "Input should be a valid integer, unable to parse string as an integer",
                    "int_parsing",
                )])
            }
            other => ApiError::Internal(other.body_text()),
        }
    }
}

/// Converts a caught handler panic into a 500 response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let msg = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(format!("handler panicked: {msg}")).into_response()
}
