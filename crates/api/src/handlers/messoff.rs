//! Handlers for the `/messoff` resource (leave requests).

use axum::extract::State;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use hms_core::billing::{day_span_dates, month_bounds};
use hms_core::error::CoreError;
use hms_core::status::{is_decision_status, STATUS_APPROVED, STATUS_REJECTED};
use hms_core::types::DbId;
use hms_db::repositories::{MessOffRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /messoff/request`.
#[derive(Debug, Deserialize)]
pub struct LeaveRequest {
    pub student: DbId,
    pub leaving_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Request body for per-student queries.
#[derive(Debug, Deserialize)]
pub struct StudentQuery {
    pub student: DbId,
}

/// Request body for per-hostel queries.
#[derive(Debug, Deserialize)]
pub struct HostelQuery {
    pub hostel: DbId,
}

/// Request body for `POST /messoff/update`.
#[derive(Debug, Deserialize)]
pub struct DecideRequest {
    pub id: DbId,
    pub status: String,
}

/// POST /api/v1/messoff/request
///
/// File a leave request. The interval must be well-ordered and must not
/// start in the past; the hostel is taken from the student's record.
pub async fn request(
    State(state): State<AppState>,
    Json(input): Json<LeaveRequest>,
) -> AppResult<Json<serde_json::Value>> {
    if input.leaving_date > input.return_date {
        return Err(AppError::BadRequest(
            "Leaving date cannot be greater than return date".into(),
        ));
    }
    let today = Utc::now().date_naive();
    if input.leaving_date < today {
        return Err(AppError::BadRequest(
            "Request cannot be made for past Leave".into(),
        ));
    }

    let student = StudentRepo::find_by_id(&state.pool, input.student)
        .await?
        .ok_or_else(|| AppError::BadRequest("Student not found".into()))?;

    MessOffRepo::create(
        &state.pool,
        student.id,
        student.hostel_id,
        input.leaving_date,
        input.return_date,
    )
    .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Leave request sent successfully",
    })))
}

/// POST /api/v1/messoff/count
///
/// A student's leave requests filed for the current month, plus the
/// total number of approved leave days in that window.
pub async fn count(
    State(state): State<AppState>,
    Json(input): Json<StudentQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let (from, to) = month_bounds(Utc::now());
    let list =
        MessOffRepo::list_for_student_between(&state.pool, input.student, from, to).await?;

    let approved: i64 = list
        .iter()
        .filter(|leave| leave.status == STATUS_APPROVED)
        .map(|leave| day_span_dates(leave.leaving_date, leave.return_date))
        .sum();

    Ok(Json(serde_json::json!({
        "success": true,
        "list": list,
        "approved": approved,
    })))
}

/// POST /api/v1/messoff/list
///
/// A hostel's pending requests plus this month's approved/rejected
/// counts, for the admin dashboard.
pub async fn list(
    State(state): State<AppState>,
    Json(input): Json<HostelQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let (from, to) = month_bounds(Utc::now());

    let list = MessOffRepo::list_pending_for_hostel(&state.pool, input.hostel).await?;
    let approved =
        MessOffRepo::count_for_hostel_between(&state.pool, input.hostel, STATUS_APPROVED, from, to)
            .await?;
    let rejected =
        MessOffRepo::count_for_hostel_between(&state.pool, input.hostel, STATUS_REJECTED, from, to)
            .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "list": list,
        "approved": approved,
        "rejected": rejected,
    })))
}

/// POST /api/v1/messoff/update
///
/// Approve or reject a pending request. Decided requests are never
/// re-opened, so an already-decided id answers 404.
pub async fn update(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<DecideRequest>,
) -> AppResult<Json<serde_json::Value>> {
    if !is_decision_status(&input.status) {
        return Err(AppError::BadRequest(
            "Status must be 'approved' or 'rejected'".into(),
        ));
    }

    let request = MessOffRepo::decide(&state.pool, input.id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Leave request",
            id: input.id,
        }))?;

    Ok(Json(
        serde_json::json!({ "success": true, "request": request }),
    ))
}

/// GET /api/v1/messoff/all
///
/// Every leave request across hostels, partitioned by status.
pub async fn all(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let requests = MessOffRepo::list_all(&state.pool).await?;

    let (mut list, mut approved, mut rejected) = (Vec::new(), Vec::new(), Vec::new());
    for request in requests {
        match request.status.as_str() {
            STATUS_APPROVED => approved.push(request),
            STATUS_REJECTED => rejected.push(request),
            _ => list.push(request),
        }
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "list": list,
        "approved": approved,
        "rejected": rejected,
    })))
}
