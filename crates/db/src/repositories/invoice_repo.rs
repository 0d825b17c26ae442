//! Repository for the `invoices` table.

use chrono::NaiveDate;
use hms_core::types::DbId;
use sqlx::PgPool;

use crate::models::invoice::{Invoice, InvoiceWithStudent};

/// Column list for `invoices` queries.
const COLUMNS: &str = "id, student_id, amount, status, period_start, date";

pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert an invoice for `(student, period)` only if none exists yet.
    ///
    /// The `uq_invoice_student_period` index makes the insert atomic, so
    /// re-running a partially completed batch never duplicates invoices.
    /// Returns the new invoice id, or `None` when one already existed.
    pub async fn insert_if_absent(
        pool: &PgPool,
        student_id: DbId,
        amount: i64,
        period_start: NaiveDate,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO invoices (student_id, amount, period_start) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (student_id, period_start) DO NOTHING \
             RETURNING id",
        )
        .bind(student_id)
        .bind(amount)
        .bind(period_start)
        .fetch_optional(pool)
        .await
    }

    /// Count invoices for a hostel's roster in the given billing period.
    pub async fn count_for_hostel_period(
        pool: &PgPool,
        hostel_id: DbId,
        period_start: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM invoices i \
             JOIN students s ON s.id = i.student_id \
             WHERE s.hostel_id = $1 AND i.period_start = $2",
        )
        .bind(hostel_id)
        .bind(period_start)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// List every invoice for a student, newest first.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Invoice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM invoices \
             WHERE student_id = $1 \
             ORDER BY date DESC"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// List every invoice for a hostel's roster with student display
    /// fields, newest first.
    pub async fn list_for_hostel(
        pool: &PgPool,
        hostel_id: DbId,
    ) -> Result<Vec<InvoiceWithStudent>, sqlx::Error> {
        sqlx::query_as::<_, InvoiceWithStudent>(
            "SELECT i.id, i.student_id, i.amount, i.status, i.period_start, i.date, \
                    s.name, s.room_no, s.cms_id \
             FROM invoices i \
             JOIN students s ON s.id = i.student_id \
             WHERE s.hostel_id = $1 \
             ORDER BY i.date DESC",
        )
        .bind(hostel_id)
        .fetch_all(pool)
        .await
    }

    /// Set the status of a student's invoice for the given billing period.
    ///
    /// Returns `None` when the student has no invoice in that period.
    pub async fn update_status_for_period(
        pool: &PgPool,
        student_id: DbId,
        period_start: NaiveDate,
        status: &str,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices SET status = $3 \
             WHERE student_id = $1 AND period_start = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(student_id)
            .bind(period_start)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
