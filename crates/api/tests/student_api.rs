//! HTTP-level integration tests for student registration and roster
//! management.

mod common;

use axum::http::StatusCode;
use common::{body_json, first_error_msg, post_json};
use sqlx::PgPool;

/// A valid registration request body targeting the given hostel.
fn registration_body(cms_id: i64, email: &str, hostel: i64) -> serde_json::Value {
    serde_json::json!({
        "name": "Ahmed Khan",
        "cms_id": cms_id,
        "room_no": "214",
        "batch": "2021",
        "dept": "SEECS",
        "course": "BSCS",
        "email": email,
        "contact": "03331234567",
        "parent_mobile": "03331234568",
        "address": "House 5, Street 12",
        "dob": "2001-06-15",
        "hostel": hostel,
        "password": "strong_password"
    })
}

/// Registration creates the account and returns 201 with the student row.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_student(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = registration_body(345678, "ahmed@test.com", 1);
    let response = post_json(app, "/api/v1/student/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["student"]["cms_id"], 345678);
    assert_eq!(json["student"]["email"], "ahmed@test.com");
    assert_eq!(json["student"]["hostel_id"], 1);
    // The password hash must never appear in any response.
    assert!(json["student"]["password_hash"].is_null());
}

/// Registering the same CMS id twice returns 409.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_duplicate_cms_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = registration_body(345678, "first@test.com", 1);
    let response = post_json(app, "/api/v1/student/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let body = registration_body(345678, "second@test.com", 1);
    let response = post_json(app, "/api/v1/student/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Field validation failures answer 400 with one message per violation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_validation_errors(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = registration_body(99, "not-an-email", 1);
    body["contact"] = serde_json::json!("12345");
    body["password"] = serde_json::json!("short");
    let response = post_json(app, "/api/v1/student/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    let messages: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["msg"].as_str().unwrap())
        .collect();
    assert!(messages.contains(&"CMS ID of at least 6 digit is required"));
    assert!(messages.contains(&"Please include a valid email"));
    assert!(messages.contains(&"Enter a valid contact number"));
    assert!(messages.contains(&"Please enter a password with 8 or more characters"));
}

/// Registering against an unknown hostel returns 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_unknown_hostel(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = registration_body(345678, "ahmed@test.com", 999);
    let response = post_json(app, "/api/v1/student/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(first_error_msg(&json), "Hostel not found");
}

/// The roster endpoint returns only the requested hostel's students.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_all_filters_by_hostel(pool: PgPool) {
    common::seed_student(&pool, 111111, 1).await;
    common::seed_student(&pool, 222222, 1).await;
    common::seed_student(&pool, 333333, 2).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/student/get-all", serde_json::json!({ "hostel": 1 })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let students = json["students"].as_array().unwrap();
    assert_eq!(students.len(), 2);
    assert!(students.iter().all(|s| s["hostel_id"] == 1));
}

/// Updating by CMS id rewrites the contact/academic fields.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_student(pool: PgPool) {
    let student = common::seed_student(&pool, 111111, 1).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "cms_id": student.cms_id,
        "room_no": "309",
        "batch": "2022",
        "dept": "SMME",
        "course": "BSME",
        "contact": "03009876543",
        "parent_mobile": "03009876544",
        "address": "New Address 7"
    });
    let response = post_json(app, "/api/v1/student/update", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["student"]["room_no"], "309");
    assert_eq!(json["student"]["dept"], "SMME");
    // Identity fields are untouched.
    assert_eq!(json["student"]["name"], "Test Student");
}

/// Updating an unknown CMS id returns 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_unknown_student(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "cms_id": 654321,
        "room_no": "309",
        "batch": "2022",
        "dept": "SMME",
        "course": "BSME",
        "contact": "03009876543",
        "parent_mobile": "03009876544",
        "address": "New Address 7"
    });
    let response = post_json(app, "/api/v1/student/update", body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
