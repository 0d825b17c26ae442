use chrono::NaiveDate;
use hms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `mess_offs` table (a leave request excusing a student
/// from meal billing between `leaving_date` and `return_date`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MessOff {
    pub id: DbId,
    pub student_id: DbId,
    pub hostel_id: DbId,
    pub leaving_date: NaiveDate,
    pub return_date: NaiveDate,
    pub status: String,
    pub request_date: Timestamp,
}

/// A leave request joined with the student's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MessOffWithStudent {
    pub id: DbId,
    pub student_id: DbId,
    pub hostel_id: DbId,
    pub leaving_date: NaiveDate,
    pub return_date: NaiveDate,
    pub status: String,
    pub request_date: Timestamp,
    pub name: String,
    pub room_no: String,
}
