//! Handlers for the `/attendance` resource.
//!
//! These endpoints answer 422 (not 400) to malformed input; the rest of
//! the API uses 400. The one-record-per-day invariant is enforced by the
//! `uq_attendance_student_day` index via a conditional insert, so two
//! concurrent marks for the same student cannot both succeed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use hms_core::error::CoreError;
use hms_core::status::is_attendance_status;
use hms_core::types::DbId;
use hms_db::repositories::AttendanceRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for mark/update.
#[derive(Debug, Deserialize)]
pub struct AttendanceInput {
    pub student: DbId,
    pub status: String,
}

/// Request body for per-student listing.
#[derive(Debug, Deserialize)]
pub struct StudentQuery {
    pub student: DbId,
}

/// Request body for per-hostel listing.
#[derive(Debug, Deserialize)]
pub struct HostelQuery {
    pub hostel: DbId,
}

/// Reject statuses outside the attendance vocabulary with 422.
fn check_status(status: &str) -> Result<(), AppError> {
    if is_attendance_status(status) {
        Ok(())
    } else {
        Err(AppError::Unprocessable(vec![
            "Status must be 'present' or 'absent'".to_string(),
        ]))
    }
}

/// POST /api/v1/attendance/mark
///
/// Mark today's attendance for a student. Answers 201 with the created
/// record, or 409 when a record already exists for today.
pub async fn mark(
    State(state): State<AppState>,
    Json(input): Json<AttendanceInput>,
) -> AppResult<impl IntoResponse> {
    check_status(&input.status)?;

    let today = Utc::now().date_naive();
    let record = AttendanceRepo::insert_if_absent(&state.pool, input.student, today, &input.status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Attendance already marked for today".into(),
            ))
        })?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "result": record })),
    ))
}

/// POST /api/v1/attendance/get
///
/// List every attendance record for a student, newest day first.
pub async fn get(
    State(state): State<AppState>,
    Json(input): Json<StudentQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let attendance = AttendanceRepo::list_for_student(&state.pool, input.student).await?;

    Ok(Json(
        serde_json::json!({ "success": true, "attendance": attendance }),
    ))
}

/// POST /api/v1/attendance/update
///
/// Update today's attendance record. Answers 404 when the student has no
/// record for today (records are only updatable same-day).
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<AttendanceInput>,
) -> AppResult<Json<serde_json::Value>> {
    check_status(&input.status)?;

    let today = Utc::now().date_naive();
    let record = AttendanceRepo::update_for_day(&state.pool, input.student, today, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attendance",
            id: input.student,
        }))?;

    Ok(Json(
        serde_json::json!({ "success": true, "attendance": record }),
    ))
}

/// POST /api/v1/attendance/hostel
///
/// List today's attendance records for a hostel with student display
/// fields, for the admin dashboard.
pub async fn by_hostel(
    State(state): State<AppState>,
    Json(input): Json<HostelQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let today = Utc::now().date_naive();
    let attendance = AttendanceRepo::list_for_hostel_on(&state.pool, input.hostel, today).await?;

    Ok(Json(
        serde_json::json!({ "success": true, "attendance": attendance }),
    ))
}
