use hms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `hostels` table. Static reference data, seeded once.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hostel {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub rooms: i32,
    pub capacity: i32,
    pub vacant: i32,
    pub created_at: Timestamp,
}
