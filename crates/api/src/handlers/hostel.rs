//! Handlers for the `/hostel` resource (seeded reference data).

use axum::extract::State;
use axum::Json;

use hms_db::repositories::HostelRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/hostel/list
///
/// List all hostels.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let hostels = HostelRepo::list(&state.pool).await?;

    Ok(Json(
        serde_json::json!({ "success": true, "hostels": hostels }),
    ))
}
