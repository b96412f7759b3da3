use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    record_store: RecordStoreHealth,
}

#[derive(Serialize)]
pub struct RecordStoreHealth {
    configured: bool,
}

/// Health check endpoint
///
/// Reports process liveness and whether record-store credentials are
/// present. Always 200: a missing store keeps the site up, it only
/// refuses signups.
pub async fn health_handler(State(state): State<AxumAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        record_store: RecordStoreHealth {
            configured: state.deps.store.is_some(),
        },
    })
}
