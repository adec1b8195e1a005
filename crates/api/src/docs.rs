//! OpenAPI document for the service.

use utoipa::OpenApi;

use crate::error::{ErrorResponse, ValidationDetail, ValidationErrorResponse};
use crate::routes::health::{HealthResponse, ReadinessChecks, ReadinessResponse};
use crate::routes::items::{CreateItemRequest, ItemResponse};
use crate::routes::root::ServiceInfo;
use crate::routes::{health, items, root};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FastapiServiceOrderservice API",
        description = "Microservice generated from prompt: Create Python FastAPI service OrderService",
        version = "1.0.0"
    ),
    paths(
        root::index,
        health::health_check,
        health::readiness_check,
        items::list,
        items::get,
        items::create,
    ),
    components(schemas(
        ServiceInfo,
        HealthResponse,
        ReadinessChecks,
        ReadinessResponse,
        CreateItemRequest,
        ItemResponse,
        ErrorResponse,
        ValidationDetail,
        ValidationErrorResponse,
    )),
    tags(
        (name = "Root"),
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Items", description = "In-memory item registry"),
    )
)]
pub struct ApiDoc;
