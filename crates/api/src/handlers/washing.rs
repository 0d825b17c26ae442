//! Handlers for the `/washingmachine` resource (slot bookings).
//!
//! The no-double-booking invariant is enforced by the partial
//! `uq_slot_booking_active` index via a conditional insert: a slot is
//! taken while any pending or approved booking holds it, and frees up
//! once that booking is rejected.

use axum::extract::State;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use hms_core::billing::month_bounds;
use hms_core::error::CoreError;
use hms_core::status::{is_decision_status, STATUS_APPROVED, STATUS_REJECTED};
use hms_core::types::DbId;
use hms_db::repositories::{SlotBookingRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /washingmachine/request`.
#[derive(Debug, Deserialize)]
pub struct SlotRequest {
    pub student: DbId,
    pub slot_date: NaiveDate,
    pub slot_time: String,
}

/// Request body for per-hostel queries.
#[derive(Debug, Deserialize)]
pub struct HostelQuery {
    pub hostel: DbId,
}

/// Request body for `POST /washingmachine/update`.
#[derive(Debug, Deserialize)]
pub struct DecideRequest {
    pub id: DbId,
    pub status: String,
}

/// POST /api/v1/washingmachine/request
///
/// Book a washing-machine slot. The date must not be in the past and the
/// `(hostel, date, time)` slot must be free; the hostel is taken from
/// the student's record.
pub async fn request(
    State(state): State<AppState>,
    Json(input): Json<SlotRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let today = Utc::now().date_naive();
    if input.slot_date < today {
        return Err(AppError::BadRequest(
            "Request cannot be made for past dates".into(),
        ));
    }

    let student = StudentRepo::find_by_id(&state.pool, input.student)
        .await?
        .ok_or_else(|| AppError::BadRequest("Student not found".into()))?;

    SlotBookingRepo::insert_if_free(
        &state.pool,
        student.id,
        student.hostel_id,
        input.slot_date,
        &input.slot_time,
    )
    .await?
    .ok_or_else(|| AppError::BadRequest("This slot is already booked".into()))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Washing machine slot requested successfully",
    })))
}

/// POST /api/v1/washingmachine/list
///
/// A hostel's pending bookings plus this month's approved/rejected
/// counts, for the admin dashboard.
pub async fn list(
    State(state): State<AppState>,
    Json(input): Json<HostelQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let (from, to) = month_bounds(Utc::now());

    let list = SlotBookingRepo::list_pending_for_hostel(&state.pool, input.hostel).await?;
    let approved = SlotBookingRepo::count_for_hostel_between(
        &state.pool,
        input.hostel,
        STATUS_APPROVED,
        from,
        to,
    )
    .await?;
    let rejected = SlotBookingRepo::count_for_hostel_between(
        &state.pool,
        input.hostel,
        STATUS_REJECTED,
        from,
        to,
    )
    .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "list": list,
        "approved": approved,
        "rejected": rejected,
    })))
}

/// POST /api/v1/washingmachine/update
///
/// Approve or reject a booking. Answers 404 for an unknown id.
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

    let booking = SlotBookingRepo::set_status(&state.pool, input.id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Slot booking",
            id: input.id,
        }))?;

    Ok(Json(
        serde_json::json!({ "success": true, "booking": booking }),
    ))
}

/// GET /api/v1/washingmachine/all
///
/// Every booking across hostels, partitioned by status.
pub async fn all(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let bookings = SlotBookingRepo::list_all(&state.pool).await?;

    let (mut list, mut approved, mut rejected) = (Vec::new(), Vec::new(), Vec::new());
    for booking in bookings {
        match booking.status.as_str() {
            STATUS_APPROVED => approved.push(booking),
            STATUS_REJECTED => rejected.push(booking),
            _ => list.push(booking),
        }
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "list": list,
        "approved": approved,
        "rejected": rejected,
    })))
}
