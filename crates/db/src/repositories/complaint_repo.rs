//! Repository for the `complaints` table.

use hms_core::types::DbId;
use sqlx::PgPool;

use crate::models::complaint::{Complaint, ComplaintWithStudent};

/// Column list for `complaints` queries.
const COLUMNS: &str = "id, student_id, hostel_id, type, title, description, status, date";

/// Joined column list with student display fields.
const JOINED_COLUMNS: &str = "c.id, c.student_id, c.hostel_id, c.type, c.title, \
                              c.description, c.status, c.date, s.name, s.room_no";

pub struct ComplaintRepo;

impl ComplaintRepo {
    /// Register a new complaint (status starts as `open`).
    pub async fn create(
        pool: &PgPool,
        student_id: DbId,
        hostel_id: DbId,
        kind: &str,
        title: &str,
        description: &str,
    ) -> Result<Complaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaints (student_id, hostel_id, type, title, description) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(student_id)
            .bind(hostel_id)
            .bind(kind)
            .bind(title)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// List a hostel's complaints with student display fields, newest
    /// first.
    pub async fn list_for_hostel(
        pool: &PgPool,
        hostel_id: DbId,
    ) -> Result<Vec<ComplaintWithStudent>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM complaints c \
             JOIN students s ON s.id = c.student_id \
             WHERE c.hostel_id = $1 \
             ORDER BY c.date DESC"
        );
        sqlx::query_as::<_, ComplaintWithStudent>(&query)
            .bind(hostel_id)
            .fetch_all(pool)
            .await
    }

    /// List a student's complaints, newest first.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM complaints \
             WHERE student_id = $1 \
             ORDER BY date DESC"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Mark a complaint solved. `solved` is terminal.
    ///
    /// Returns `true` if the complaint exists.
    pub async fn resolve(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE complaints SET status = 'solved' WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every complaint across hostels, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ComplaintWithStudent>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM complaints c \
             JOIN students s ON s.id = c.student_id \
             ORDER BY c.date DESC"
        );
        sqlx::query_as::<_, ComplaintWithStudent>(&query)
            .fetch_all(pool)
            .await
    }
}
