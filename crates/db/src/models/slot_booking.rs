use chrono::NaiveDate;
use hms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `slot_bookings` table (washing-machine reservations).
/// At most one pending-or-approved booking per (hostel, date, time),
/// enforced by the partial `uq_slot_booking_active` index.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SlotBooking {
    pub id: DbId,
    pub student_id: DbId,
    pub hostel_id: DbId,
    pub slot_date: NaiveDate,
    pub slot_time: String,
    pub status: String,
    pub request_date: Timestamp,
}

/// A booking joined with the student's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SlotBookingWithStudent {
    pub id: DbId,
    pub student_id: DbId,
    pub hostel_id: DbId,
    pub slot_date: NaiveDate,
    pub slot_time: String,
    pub status: String,
    pub request_date: Timestamp,
    pub name: String,
    pub room_no: String,
}
