//! Service information endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::SERVICE_NAME;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub message: String,
    pub docs: String,
}

/// GET /: describes the service and where its API documentation lives.
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses((status = 200, description = "Service information", body = ServiceInfo))
)]
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        message: "Welcome to FastapiServiceOrderservice API".to_string(),
        docs: "/docs".to_string(),
    })
}
