use chrono::NaiveDate;
use hms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub user_id: DbId,
    pub hostel_id: DbId,
    pub cms_id: i64,
    pub name: String,
    pub room_no: String,
    pub batch: String,
    pub dept: String,
    pub course: String,
    pub email: String,
    pub contact: String,
    pub parent_mobile: String,
    pub address: String,
    pub dob: NaiveDate,
    pub created_at: Timestamp,
}

/// Fields for creating a student (registration).
#[derive(Debug, Clone)]
pub struct NewStudent<'a> {
    pub hostel_id: DbId,
    pub cms_id: i64,
    pub name: &'a str,
    pub room_no: &'a str,
    pub batch: &'a str,
    pub dept: &'a str,
    pub course: &'a str,
    pub email: &'a str,
    pub contact: &'a str,
    pub parent_mobile: &'a str,
    pub address: &'a str,
    pub dob: NaiveDate,
}

/// Updatable contact/academic metadata, keyed by CMS id.
#[derive(Debug, Clone)]
pub struct StudentUpdate<'a> {
    pub cms_id: i64,
    pub room_no: &'a str,
    pub batch: &'a str,
    pub dept: &'a str,
    pub course: &'a str,
    pub contact: &'a str,
    pub parent_mobile: &'a str,
    pub address: &'a str,
}
