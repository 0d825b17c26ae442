#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use hms_api::auth::jwt::{generate_access_token, JwtConfig};
use hms_api::auth::password::hash_password;
use hms_api::config::ServerConfig;
use hms_api::router::build_app_router;
use hms_api::state::AppState;
use hms_core::types::DbId;
use hms_db::models::student::{NewStudent, Student};
use hms_db::repositories::StudentRepo;

/// Signing secret used by all integration tests.
pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Plaintext password used for all seeded accounts.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and the default daily mess rate of 100.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        mess_daily_rate: 100,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// Mint a bearer token the auth extractor accepts.
///
/// Token validation is purely cryptographic (no database lookup), so any
/// user id works.
pub fn admin_token() -> String {
    generate_access_token(1, "admin", &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collection should succeed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// First `msg` of an error envelope (`{"success": false, "errors": [..]}`).
pub fn first_error_msg(json: &serde_json::Value) -> String {
    json["errors"][0]["msg"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create a student (login user + student row) directly via the repository.
///
/// Hostels 1-8 come pre-seeded by the migrations. The email is derived
/// from the CMS id so multiple seeds in one test never collide.
pub async fn seed_student(pool: &PgPool, cms_id: i64, hostel_id: DbId) -> Student {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let email = format!("student{cms_id}@test.com");
    let new = NewStudent {
        hostel_id,
        cms_id,
        name: "Test Student",
        room_no: "101",
        batch: "2021",
        dept: "EE",
        course: "BEE",
        email: &email,
        contact: "03331234567",
        parent_mobile: "03331234568",
        address: "Test Street 1",
        dob: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
    };
    StudentRepo::register(pool, &new, &hashed)
        .await
        .expect("student seeding should succeed")
}

/// Insert a leave request with an explicit status, bypassing the pending
/// default. Used to stage approved leave for billing tests.
pub async fn seed_leave(
    pool: &PgPool,
    student_id: DbId,
    hostel_id: DbId,
    leaving_date: NaiveDate,
    return_date: NaiveDate,
    status: &str,
) {
    sqlx::query(
        "INSERT INTO mess_offs (student_id, hostel_id, leaving_date, return_date, status) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(student_id)
    .bind(hostel_id)
    .bind(leaving_date)
    .bind(return_date)
    .bind(status)
    .execute(pool)
    .await
    .expect("leave seeding should succeed");
}
