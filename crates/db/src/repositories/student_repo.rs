//! Repository for the `students` table.

use hms_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{NewStudent, Student, StudentUpdate};

/// Column list for `students` queries.
const COLUMNS: &str = "id, user_id, hostel_id, cms_id, name, room_no, batch, dept, \
                       course, email, contact, parent_mobile, address, dob, created_at";

pub struct StudentRepo;

impl StudentRepo {
    /// Register a student: create the login user and the student row in
    /// one transaction so a half-registered account can never exist.
    pub async fn register(
        pool: &PgPool,
        new: &NewStudent<'_>,
        password_hash: &str,
    ) -> Result<Student, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user_id: DbId = sqlx::query_scalar(
            "INSERT INTO users (email, password_hash, role) \
             VALUES ($1, $2, 'student') \
             RETURNING id",
        )
        .bind(new.email)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO students \
             (user_id, hostel_id, cms_id, name, room_no, batch, dept, course, \
              email, contact, parent_mobile, address, dob) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(user_id)
            .bind(new.hostel_id)
            .bind(new.cms_id)
            .bind(new.name)
            .bind(new.room_no)
            .bind(new.batch)
            .bind(new.dept)
            .bind(new.course)
            .bind(new.email)
            .bind(new.contact)
            .bind(new.parent_mobile)
            .bind(new.address)
            .bind(new.dob)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(student)
    }

    /// Fetch one student by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the full roster of a hostel.
    pub async fn list_for_hostel(
        pool: &PgPool,
        hostel_id: DbId,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students \
             WHERE hostel_id = $1 \
             ORDER BY room_no"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(hostel_id)
            .fetch_all(pool)
            .await
    }

    /// Update contact/academic metadata, keyed by CMS id.
    ///
    /// Returns `None` when no student has that CMS id.
    pub async fn update(
        pool: &PgPool,
        update: &StudentUpdate<'_>,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET \
             room_no = $2, batch = $3, dept = $4, course = $5, \
             contact = $6, parent_mobile = $7, address = $8 \
             WHERE cms_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(update.cms_id)
            .bind(update.room_no)
            .bind(update.batch)
            .bind(update.dept)
            .bind(update.course)
            .bind(update.contact)
            .bind(update.parent_mobile)
            .bind(update.address)
            .fetch_optional(pool)
            .await
    }
}
