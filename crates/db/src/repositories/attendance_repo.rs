//! Repository for the `attendance` table.

use chrono::NaiveDate;
use hms_core::types::DbId;
use sqlx::PgPool;

use crate::models::attendance::{AttendanceRecord, AttendanceWithStudent};

/// Column list for `attendance` queries.
const COLUMNS: &str = "id, student_id, date, status, created_at";

/// Provides CRUD operations for attendance records.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Insert an attendance record for `(student, date)` only if none
    /// exists yet.
    ///
    /// The `uq_attendance_student_day` index makes this atomic: under
    /// concurrent marks for the same key, exactly one insert wins and the
    /// others observe `None`.
    pub async fn insert_if_absent(
        pool: &PgPool,
        student_id: DbId,
        date: NaiveDate,
        status: &str,
    ) -> Result<Option<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance (student_id, date, status) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (student_id, date) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(student_id)
            .bind(date)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// List every attendance record for a student, newest day first.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance \
             WHERE student_id = $1 \
             ORDER BY date DESC"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Update the status of the record for `(student, date)`.
    ///
    /// Returns `None` when no record exists for that day.
    pub async fn update_for_day(
        pool: &PgPool,
        student_id: DbId,
        date: NaiveDate,
        status: &str,
    ) -> Result<Option<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE attendance SET status = $3 \
             WHERE student_id = $1 AND date = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(student_id)
            .bind(date)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// List a hostel's attendance records for one calendar day, with
    /// student display fields.
    pub async fn list_for_hostel_on(
        pool: &PgPool,
        hostel_id: DbId,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceWithStudent>, sqlx::Error> {
        sqlx::query_as::<_, AttendanceWithStudent>(
            "SELECT a.id, a.student_id, a.date, a.status, \
                    s.name, s.room_no, s.cms_id \
             FROM attendance a \
             JOIN students s ON s.id = a.student_id \
             WHERE s.hostel_id = $1 AND a.date = $2 \
             ORDER BY s.room_no",
        )
        .bind(hostel_id)
        .bind(date)
        .fetch_all(pool)
        .await
    }
}
