//! Handlers for the `/complaint` resource.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use hms_core::error::CoreError;
use hms_core::status::STATUS_SOLVED;
use hms_core::types::DbId;
use hms_db::repositories::ComplaintRepo;

use crate::error::{validation_messages, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /complaint/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterComplaint {
    pub student: DbId,
    pub hostel: DbId,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub kind: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

/// Request body for per-hostel queries.
#[derive(Debug, Deserialize)]
pub struct HostelQuery {
    pub hostel: DbId,
}

/// Request body for per-student queries.
#[derive(Debug, Deserialize)]
pub struct StudentQuery {
    pub student: DbId,
}

/// Request body for `POST /complaint/resolve`.
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub id: DbId,
}

/// POST /api/v1/complaint/register
///
/// Register a complaint. New complaints start open.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterComplaint>,
) -> AppResult<Json<serde_json::Value>> {
    input
        .validate()
        .map_err(|e| AppError::Validation(validation_messages(&e)))?;

    ComplaintRepo::create(
        &state.pool,
        input.student,
        input.hostel,
        &input.kind,
        &input.title,
        &input.description,
    )
    .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "msg": "Complaint registered successfully",
    })))
}

/// POST /api/v1/complaint/hostel
///
/// List a hostel's complaints with student display fields, newest first.
pub async fn by_hostel(
    State(state): State<AppState>,
    Json(input): Json<HostelQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let complaints = ComplaintRepo::list_for_hostel(&state.pool, input.hostel).await?;

    Ok(Json(
        serde_json::json!({ "success": true, "complaints": complaints }),
    ))
}

/// POST /api/v1/complaint/student
///
/// List a student's complaints, newest first.
pub async fn by_student(
    State(state): State<AppState>,
    Json(input): Json<StudentQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let complaints = ComplaintRepo::list_for_student(&state.pool, input.student).await?;

    Ok(Json(
        serde_json::json!({ "success": true, "complaints": complaints }),
    ))
}

/// POST /api/v1/complaint/resolve
///
/// Mark a complaint solved. `solved` is terminal; resolving an
/// already-solved complaint is a no-op that still answers success.
pub async fn resolve(
    State(state): State<AppState>,
    Json(input): Json<ResolveRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let found = ComplaintRepo::resolve(&state.pool, input.id).await?;

    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id: input.id,
        }));
    }

    Ok(Json(serde_json::json!({ "success": true })))
}

/// GET /api/v1/complaint/all
///
/// Every complaint across hostels, partitioned into unsolved and solved.
pub async fn all(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let complaints = ComplaintRepo::list_all(&state.pool).await?;

    let (mut unsolved, mut solved) = (Vec::new(), Vec::new());
    for complaint in complaints {
        if complaint.status == STATUS_SOLVED {
            solved.push(complaint);
        } else {
            unsolved.push(complaint);
        }
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "unsolved": unsolved,
        "solved": solved,
    })))
}
