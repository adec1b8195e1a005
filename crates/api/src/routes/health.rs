//! Liveness and readiness probes.

use axum::Json;
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{SERVICE_NAME, SERVICE_VERSION};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// Current UTC time, ISO-8601 without offset.
    pub timestamp: String,
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReadinessChecks {
    pub database: bool,
    pub cache: bool,
}

impl ReadinessChecks {
    /// True when every check passes.
    pub fn all_passing(&self) -> bool {
        self.database && self.cache
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

/// GET /health: liveness probe. Never touches the item store.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: iso_timestamp(Utc::now()),
        version: SERVICE_VERSION.to_string(),
    })
}

/// GET /ready: readiness probe.
///
/// Answers 200 whatever `ready` evaluates to; probe consumers must read the
/// body.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Health",
    responses((status = 200, description = "Readiness report", body = ReadinessResponse))
)]
pub async fn readiness_check() -> Json<ReadinessResponse> {
    // No database or cache backs this service yet.
    let checks = ReadinessChecks {
        database: true,
        cache: true,
    };
    Json(readiness_report(checks))
}

fn readiness_report(checks: ReadinessChecks) -> ReadinessResponse {
    ReadinessResponse {
        ready: checks.all_passing(),
        checks,
    }
}

/// Formats `now` as `YYYY-MM-DDTHH:MM:SS[.ffffff]`, dropping the fraction
/// when the microsecond component is zero.
fn iso_timestamp(now: DateTime<Utc>) -> String {
    let naive = now.naive_utc();
    if naive.nanosecond() / 1_000 == 0 {
        naive.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        naive.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
