//! Health check handler.

use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /health
///
/// Reports service liveness and database reachability. Always answers
/// 200; a broken database is reported in the body so load balancers and
/// dashboards can distinguish "down" from "up but degraded".
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_healthy = hms_db::health_check(&state.pool).await.is_ok();

    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "db_healthy": db_healthy,
    }))
}
