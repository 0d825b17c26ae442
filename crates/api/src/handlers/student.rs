//! Handlers for the `/student` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use hms_core::error::CoreError;
use hms_core::types::DbId;
use hms_db::models::student::{NewStudent, StudentUpdate};
use hms_db::repositories::{HostelRepo, StudentRepo};

use crate::auth::password::hash_password;
use crate::error::{validation_messages, AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /student/register`.
///
/// Field rules mirror the registration form: 6-digit CMS id, 11-digit
/// phone numbers, 8+ character password.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterStudent {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 100_000, max = 999_999, message = "CMS ID of at least 6 digit is required"))]
    pub cms_id: i64,
    #[validate(length(min = 1, message = "Room number is required"))]
    pub room_no: String,
    #[validate(length(min = 1, message = "Batch is required"))]
    pub batch: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub dept: String,
    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    #[validate(length(equal = 11, message = "Enter a valid contact number"))]
    pub contact: String,
    #[validate(length(equal = 11, message = "Enter a valid parent contact number"))]
    pub parent_mobile: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    pub dob: NaiveDate,
    pub hostel: DbId,
    #[validate(length(min = 8, message = "Please enter a password with 8 or more characters"))]
    pub password: String,
}

/// Request body for `POST /student/get-all`.
#[derive(Debug, Deserialize)]
pub struct HostelQuery {
    pub hostel: DbId,
}

/// Request body for `POST /student/update`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudent {
    #[validate(range(min = 100_000, max = 999_999, message = "CMS ID is required"))]
    pub cms_id: i64,
    #[validate(length(min = 1, message = "Room number is required"))]
    pub room_no: String,
    #[validate(length(min = 1, message = "Batch is required"))]
    pub batch: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub dept: String,
    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,
    #[validate(length(equal = 11, message = "Enter a valid contact number"))]
    pub contact: String,
    #[validate(length(equal = 11, message = "Enter a valid parent contact number"))]
    pub parent_mobile: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
}

/// POST /api/v1/student/register
///
/// Register a student: creates the login user and the student row in one
/// transaction. Duplicate email or CMS id answers 409 via the unique
/// indexes.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterStudent>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Validation(validation_messages(&e)))?;

    let hostel = HostelRepo::find_by_id(&state.pool, input.hostel)
        .await?
        .ok_or_else(|| AppError::BadRequest("Hostel not found".into()))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let new = NewStudent {
        hostel_id: hostel.id,
        cms_id: input.cms_id,
        name: &input.name,
        room_no: &input.room_no,
        batch: &input.batch,
        dept: &input.dept,
        course: &input.course,
        email: &input.email,
        contact: &input.contact,
        parent_mobile: &input.parent_mobile,
        address: &input.address,
        dob: input.dob,
    };

    let student = StudentRepo::register(&state.pool, &new, &password_hash).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "student": student })),
    ))
}

/// POST /api/v1/student/get-all
///
/// The full roster of a hostel.
pub async fn get_all(
    State(state): State<AppState>,
    Json(input): Json<HostelQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let students = StudentRepo::list_for_hostel(&state.pool, input.hostel).await?;

    Ok(Json(
        serde_json::json!({ "success": true, "students": students }),
    ))
}

/// POST /api/v1/student/update
///
/// Update a student's contact/academic metadata, keyed by CMS id.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<serde_json::Value>> {
    input
        .validate()
        .map_err(|e| AppError::Validation(validation_messages(&e)))?;

    let update = StudentUpdate {
        cms_id: input.cms_id,
        room_no: &input.room_no,
        batch: &input.batch,
        dept: &input.dept,
        course: &input.course,
        contact: &input.contact,
        parent_mobile: &input.parent_mobile,
        address: &input.address,
    };

    let student = StudentRepo::update(&state.pool, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: input.cms_id,
        }))?;

    Ok(Json(
        serde_json::json!({ "success": true, "student": student }),
    ))
}
