//! HTTP route handlers.

pub mod docs;
pub mod health;
pub mod items;
pub mod metrics;
pub mod root;

use crate::error::ApiError;

/// Fallback for paths no route matches.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
