use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::types::dto::common::HealthResponse;

/// Liveness probe for the item catalog service
pub struct HealthApi;

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Service health
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Report service liveness
    ///
    /// Unauthenticated; answers as long as the process is serving requests
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok".to_string(),
            service: "item-catalog-backend".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
