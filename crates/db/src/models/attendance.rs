use chrono::NaiveDate;
use hms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `attendance` table. At most one per (student, day),
/// enforced by the `uq_attendance_student_day` index.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceRecord {
    pub id: DbId,
    pub student_id: DbId,
    pub date: NaiveDate,
    pub status: String,
    pub created_at: Timestamp,
}

/// An attendance record joined with the student's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceWithStudent {
    pub id: DbId,
    pub student_id: DbId,
    pub date: NaiveDate,
    pub status: String,
    pub name: String,
    pub room_no: String,
    pub cms_id: i64,
}
