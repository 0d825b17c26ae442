use hms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `complaints` table. Created open; `solved` is terminal.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Complaint {
    pub id: DbId,
    pub student_id: DbId,
    pub hostel_id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub date: Timestamp,
}

/// A complaint joined with the student's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ComplaintWithStudent {
    pub id: DbId,
    pub student_id: DbId,
    pub hostel_id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub date: Timestamp,
    pub name: String,
    pub room_no: String,
}
