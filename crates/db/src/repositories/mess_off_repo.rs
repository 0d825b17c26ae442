//! Repository for the `mess_offs` table (leave requests).

use chrono::NaiveDate;
use hms_core::types::DbId;
use sqlx::PgPool;

use crate::models::mess_off::{MessOff, MessOffWithStudent};

/// Column list for `mess_offs` queries.
const COLUMNS: &str = "id, student_id, hostel_id, leaving_date, return_date, status, request_date";

/// Joined column list with student display fields.
const JOINED_COLUMNS: &str = "m.id, m.student_id, m.hostel_id, m.leaving_date, m.return_date, \
                              m.status, m.request_date, s.name, s.room_no";

pub struct MessOffRepo;

impl MessOffRepo {
    /// Create a pending leave request.
    pub async fn create(
        pool: &PgPool,
        student_id: DbId,
        hostel_id: DbId,
        leaving_date: NaiveDate,
        return_date: NaiveDate,
    ) -> Result<MessOff, sqlx::Error> {
        let query = format!(
            "INSERT INTO mess_offs (student_id, hostel_id, leaving_date, return_date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MessOff>(&query)
            .bind(student_id)
            .bind(hostel_id)
            .bind(leaving_date)
            .bind(return_date)
            .fetch_one(pool)
            .await
    }

    /// List a student's approved leave requests (the invoice generator
    /// filters these further by billing month).
    pub async fn list_approved_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<MessOff>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mess_offs \
             WHERE student_id = $1 AND status = 'approved' \
             ORDER BY leaving_date"
        );
        sqlx::query_as::<_, MessOff>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// List a student's leave requests whose leaving date falls inside
    /// `[from, to)`.
    pub async fn list_for_student_between(
        pool: &PgPool,
        student_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<MessOff>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mess_offs \
             WHERE student_id = $1 AND leaving_date >= $2 AND leaving_date < $3 \
             ORDER BY leaving_date"
        );
        sqlx::query_as::<_, MessOff>(&query)
            .bind(student_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// List a hostel's pending requests with student display fields.
    pub async fn list_pending_for_hostel(
        pool: &PgPool,
        hostel_id: DbId,
    ) -> Result<Vec<MessOffWithStudent>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM mess_offs m \
             JOIN students s ON s.id = m.student_id \
             WHERE m.hostel_id = $1 AND m.status = 'pending' \
             ORDER BY m.request_date"
        );
        sqlx::query_as::<_, MessOffWithStudent>(&query)
            .bind(hostel_id)
            .fetch_all(pool)
            .await
    }

    /// Count a hostel's requests with the given status and a leaving date
    /// inside `[from, to)`.
    pub async fn count_for_hostel_between(
        pool: &PgPool,
        hostel_id: DbId,
        status: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM mess_offs \
             WHERE hostel_id = $1 AND status = $2 \
               AND leaving_date >= $3 AND leaving_date < $4",
        )
        .bind(hostel_id)
        .bind(status)
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Decide a pending request (approve or reject).
    ///
    /// Only pending requests transition; a decided request is never
    /// re-opened, so `None` is returned when the id is unknown or the
    /// request was already decided.
    pub async fn decide(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<MessOff>, sqlx::Error> {
        let query = format!(
            "UPDATE mess_offs SET status = $2 \
             WHERE id = $1 AND status = 'pending' \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MessOff>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// List every request across hostels, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<MessOffWithStudent>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM mess_offs m \
             JOIN students s ON s.id = m.student_id \
             ORDER BY m.request_date DESC"
        );
        sqlx::query_as::<_, MessOffWithStudent>(&query)
            .fetch_all(pool)
            .await
    }
}
