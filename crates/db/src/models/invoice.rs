use chrono::NaiveDate;
use hms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `invoices` table. At most one per (student, billing
/// period), enforced by the `uq_invoice_student_period` index.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub student_id: DbId,
    pub amount: i64,
    pub status: String,
    pub period_start: NaiveDate,
    pub date: Timestamp,
}

/// An invoice joined with the student's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoiceWithStudent {
    pub id: DbId,
    pub student_id: DbId,
    pub amount: i64,
    pub status: String,
    pub period_start: NaiveDate,
    pub date: Timestamp,
    pub name: String,
    pub room_no: String,
    pub cms_id: i64,
}
