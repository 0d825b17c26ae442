//! HTTP-level integration tests for daily attendance.

mod common;

use axum::http::StatusCode;
use common::{body_json, first_error_msg, post_json};
use sqlx::PgPool;

/// Marking attendance creates today's record and returns 201.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_attendance(pool: PgPool) {
    let student = common::seed_student(&pool, 111111, 1).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "student": student.id, "status": "present" });
    let response = post_json(app, "/api/v1/attendance/mark", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["result"]["student_id"], student.id);
    assert_eq!(json["result"]["status"], "present");
}

/// A second mark on the same day returns 409 and leaves one record.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_attendance_twice_conflicts(pool: PgPool) {
    let student = common::seed_student(&pool, 111111, 1).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "student": student.id, "status": "present" });
    let response = post_json(app, "/api/v1/attendance/mark", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/attendance/mark", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(first_error_msg(&json), "Attendance already marked for today");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE student_id = $1")
        .bind(student.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// Statuses outside the attendance vocabulary answer 422.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_attendance_invalid_status(pool: PgPool) {
    let student = common::seed_student(&pool, 111111, 1).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "student": student.id, "status": "late" });
    let response = post_json(app, "/api/v1/attendance/mark", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(first_error_msg(&json), "Status must be 'present' or 'absent'");
}

/// The per-student listing returns every record for that student.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_attendance_for_student(pool: PgPool) {
    let student = common::seed_student(&pool, 111111, 1).await;
    let other = common::seed_student(&pool, 222222, 1).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "student": student.id, "status": "present" });
    post_json(app, "/api/v1/attendance/mark", body).await;
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "student": other.id, "status": "absent" });
    post_json(app, "/api/v1/attendance/mark", body).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "student": student.id });
    let response = post_json(app, "/api/v1/attendance/get", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let records = json["attendance"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["student_id"], student.id);
}

/// Updating today's record flips the status in place.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_attendance(pool: PgPool) {
    let student = common::seed_student(&pool, 111111, 1).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "student": student.id, "status": "absent" });
    post_json(app, "/api/v1/attendance/mark", body).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "student": student.id, "status": "present" });
    let response = post_json(app, "/api/v1/attendance/update", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["attendance"]["status"], "present");
}

/// Updating when no record exists for today returns 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_attendance_without_record(pool: PgPool) {
    let student = common::seed_student(&pool, 111111, 1).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "student": student.id, "status": "present" });
    let response = post_json(app, "/api/v1/attendance/update", body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The hostel listing includes student display fields and only covers the
/// requested hostel.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_attendance_by_hostel(pool: PgPool) {
    let in_hostel = common::seed_student(&pool, 111111, 1).await;
    let elsewhere = common::seed_student(&pool, 222222, 2).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "student": in_hostel.id, "status": "present" });
    post_json(app, "/api/v1/attendance/mark", body).await;
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "student": elsewhere.id, "status": "present" });
    post_json(app, "/api/v1/attendance/mark", body).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/attendance/hostel",
        serde_json::json!({ "hostel": 1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let records = json["attendance"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["student_id"], in_hostel.id);
    assert_eq!(records[0]["name"], "Test Student");
    assert_eq!(records[0]["room_no"], "101");
}
