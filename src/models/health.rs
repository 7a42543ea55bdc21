use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status payload for the liveness and readiness probes
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
