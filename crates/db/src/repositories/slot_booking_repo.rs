//! Repository for the `slot_bookings` table (washing-machine slots).

use chrono::NaiveDate;
use hms_core::types::DbId;
use sqlx::PgPool;

use crate::models::slot_booking::{SlotBooking, SlotBookingWithStudent};

/// Column list for `slot_bookings` queries.
const COLUMNS: &str = "id, student_id, hostel_id, slot_date, slot_time, status, request_date";

/// Joined column list with student display fields.
const JOINED_COLUMNS: &str = "b.id, b.student_id, b.hostel_id, b.slot_date, b.slot_time, \
                              b.status, b.request_date, s.name, s.room_no";

pub struct SlotBookingRepo;

impl SlotBookingRepo {
    /// Create a pending booking only if no pending-or-approved booking
    /// holds the same `(hostel, date, time)` slot.
    ///
    /// The partial `uq_slot_booking_active` index makes this atomic:
    /// under concurrent requests for the same slot, exactly one insert
    /// wins and the others observe `None`.
    pub async fn insert_if_free(
        pool: &PgPool,
        student_id: DbId,
        hostel_id: DbId,
        slot_date: NaiveDate,
        slot_time: &str,
    ) -> Result<Option<SlotBooking>, sqlx::Error> {
        let query = format!(
            "INSERT INTO slot_bookings (student_id, hostel_id, slot_date, slot_time) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (hostel_id, slot_date, slot_time) \
                 WHERE status IN ('pending', 'approved') \
                 DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SlotBooking>(&query)
            .bind(student_id)
            .bind(hostel_id)
            .bind(slot_date)
            .bind(slot_time)
            .fetch_optional(pool)
            .await
    }

    /// List a hostel's pending bookings with student display fields.
    pub async fn list_pending_for_hostel(
        pool: &PgPool,
        hostel_id: DbId,
    ) -> Result<Vec<SlotBookingWithStudent>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM slot_bookings b \
             JOIN students s ON s.id = b.student_id \
             WHERE b.hostel_id = $1 AND b.status = 'pending' \
             ORDER BY b.slot_date, b.slot_time"
        );
        sqlx::query_as::<_, SlotBookingWithStudent>(&query)
            .bind(hostel_id)
            .fetch_all(pool)
            .await
    }

    /// Count a hostel's bookings with the given status and a slot date
    /// inside `[from, to)`.
    pub async fn count_for_hostel_between(
        pool: &PgPool,
        hostel_id: DbId,
        status: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM slot_bookings \
             WHERE hostel_id = $1 AND status = $2 \
               AND slot_date >= $3 AND slot_date < $4",
        )
        .bind(hostel_id)
        .bind(status)
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Set a booking's status by id.
    ///
    /// Returns `None` when the id is unknown.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<SlotBooking>, sqlx::Error> {
        let query = format!(
            "UPDATE slot_bookings SET status = $2 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SlotBooking>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// List every booking across hostels, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SlotBookingWithStudent>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM slot_bookings b \
             JOIN students s ON s.id = b.student_id \
             ORDER BY b.request_date DESC"
        );
        sqlx::query_as::<_, SlotBookingWithStudent>(&query)
            .fetch_all(pool)
            .await
    }
}
