//! OpenAPI document endpoint.

use axum::Json;
use utoipa::OpenApi;

use crate::docs::ApiDoc;

/// GET /docs and GET /openapi.json: the generated OpenAPI document.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
