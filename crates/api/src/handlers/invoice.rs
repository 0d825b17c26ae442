//! Handlers for the `/invoice` resource, including monthly batch
//! generation.
//!
//! Invoices are generated in arrears: a run in month M creates one
//! invoice per student charging for every day of month M-1, minus the
//! daily rate for each approved leave day attributed to the billing
//! month. Per-student persistence failures never abort the batch; they
//! are logged and reported back with the success count.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use hms_core::billing::{self, BatchOutcome, LeaveInterval};
use hms_core::error::CoreError;
use hms_core::status::is_invoice_status;
use hms_core::types::DbId;
use hms_db::repositories::{InvoiceRepo, MessOffRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for batch generation and per-hostel listing.
#[derive(Debug, Deserialize)]
pub struct HostelQuery {
    pub hostel: DbId,
}

/// Request body for per-student listing.
#[derive(Debug, Deserialize)]
pub struct StudentQuery {
    pub student: DbId,
}

/// Request body for invoice status updates.
#[derive(Debug, Deserialize)]
pub struct UpdateInvoice {
    pub student: DbId,
    pub status: String,
}

/// POST /api/v1/invoice/generate
///
/// Generate this month's invoices for every student of a hostel.
///
/// Short-circuits with 400 when the count of current-month invoices for
/// the roster already equals the roster size. Otherwise each student is
/// processed sequentially; the `uq_invoice_student_period` index makes
/// the per-student insert idempotent, so students invoiced by an earlier
/// partial run are skipped rather than duplicated.
pub async fn generate(
    State(state): State<AppState>,
    Json(input): Json<HostelQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let now = Utc::now();
    let (period_start, _) = billing::month_bounds(now);

    let students = StudentRepo::list_for_hostel(&state.pool, input.hostel).await?;

    let existing = InvoiceRepo::count_for_hostel_period(&state.pool, input.hostel, period_start)
        .await?;
    if existing == students.len() as i64 {
        return Err(AppError::BadRequest("Invoices already generated".into()));
    }

    let days = billing::days_in_previous_month(now);
    let month = billing::billing_month(now);
    let rate = state.config.mess_daily_rate;

    let mut outcome = BatchOutcome::default();

    for student in &students {
        let leaves = match MessOffRepo::list_approved_for_student(&state.pool, student.id).await {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(
                    student_id = student.id,
                    error = %err,
                    "Failed to load leave requests, skipping student"
                );
                outcome.record_failure(student.id, err.to_string());
                continue;
            }
        };

        let intervals: Vec<LeaveInterval> = leaves
            .iter()
            .filter(|leave| {
                billing::qualifies_for_billing_month(&leave.status, leave.return_date, month)
            })
            .map(|leave| LeaveInterval {
                leaving_date: leave.leaving_date,
                return_date: leave.return_date,
            })
            .collect();

        let amount = billing::prorate(rate, days, &intervals);

        match InvoiceRepo::insert_if_absent(&state.pool, student.id, amount, period_start).await {
            Ok(Some(_)) => outcome.record_success(),
            Ok(None) => {
                // Invoiced by an earlier partial run; neither a success
                // nor a failure of this batch.
                tracing::debug!(student_id = student.id, "Invoice already exists, skipped");
            }
            Err(err) => {
                tracing::warn!(
                    student_id = student.id,
                    error = %err,
                    "Failed to persist invoice, continuing batch"
                );
                outcome.record_failure(student.id, err.to_string());
            }
        }
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "count": outcome.created,
        "failures": outcome.failures,
    })))
}

/// POST /api/v1/invoice/student
///
/// List every invoice for a student, newest first.
pub async fn by_student(
    State(state): State<AppState>,
    Json(input): Json<StudentQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let invoices = InvoiceRepo::list_for_student(&state.pool, input.student).await?;

    Ok(Json(
        serde_json::json!({ "success": true, "invoices": invoices }),
    ))
}

/// POST /api/v1/invoice/getbyid
///
/// List every invoice for a hostel's roster with student display fields.
pub async fn by_hostel(
    State(state): State<AppState>,
    Json(input): Json<HostelQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let invoices = InvoiceRepo::list_for_hostel(&state.pool, input.hostel).await?;

    Ok(Json(
        serde_json::json!({ "success": true, "invoices": invoices }),
    ))
}

/// POST /api/v1/invoice/update
///
/// Set the status of a student's current-month invoice (admin marks it
/// paid or approved). Answers 404 when the student has no invoice this
/// month.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateInvoice>,
) -> AppResult<Json<serde_json::Value>> {
    if !is_invoice_status(&input.status) {
        return Err(AppError::BadRequest(
            "Status must be 'pending', 'approved' or 'paid'".into(),
        ));
    }

    let (period_start, _) = billing::month_bounds(Utc::now());
    let invoice = InvoiceRepo::update_status_for_period(
        &state.pool,
        input.student,
        period_start,
        &input.status,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Invoice",
        id: input.student,
    }))?;

    Ok(Json(
        serde_json::json!({ "success": true, "invoice": invoice }),
    ))
}
