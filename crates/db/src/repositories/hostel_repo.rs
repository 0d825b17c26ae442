//! Repository for the `hostels` table (seeded reference data).

use hms_core::types::DbId;
use sqlx::PgPool;

use crate::models::hostel::Hostel;

/// Column list for `hostels` queries.
const COLUMNS: &str = "id, name, location, rooms, capacity, vacant, created_at";

pub struct HostelRepo;

impl HostelRepo {
    /// List all hostels, in seed order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Hostel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hostels ORDER BY id");
        sqlx::query_as::<_, Hostel>(&query).fetch_all(pool).await
    }

    /// Fetch one hostel by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hostel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hostels WHERE id = $1");
        sqlx::query_as::<_, Hostel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
