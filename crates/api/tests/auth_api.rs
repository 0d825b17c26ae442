//! HTTP-level integration tests for login and bearer-token enforcement.

mod common;

use axum::http::StatusCode;
use common::{body_json, first_error_msg, get, get_auth, post_json, TEST_PASSWORD};
use sqlx::PgPool;

/// Successful login returns a bearer token plus the user's id, email, and role.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let student = common::seed_student(&pool, 123456, 1).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": student.email, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["token"].is_string(), "response must contain a token");
    assert_eq!(json["user"]["id"], student.user_id);
    assert_eq!(json["user"]["email"], student.email);
    assert_eq!(json["user"]["role"], "student");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let student = common::seed_student(&pool, 123456, 1).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": student.email, "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(first_error_msg(&json), "Invalid email or password");
}

/// Login with an email that has no account returns 401 with the same
/// message, leaking nothing about account existence.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(first_error_msg(&json), "Invalid email or password");
}

/// Protected endpoints reject requests with no Authorization header.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_protected_endpoint_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/messoff/all").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(first_error_msg(&json), "No token, authorization denied");
}

/// Protected endpoints reject a malformed bearer token.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_protected_endpoint_rejects_garbage_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/messoff/all", "not-a-real-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(first_error_msg(&json), "Token is not valid");
}

/// A token minted at login grants access to protected endpoints.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_token_grants_access(pool: PgPool) {
    let student = common::seed_student(&pool, 123456, 1).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": student.email, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/messoff/all", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
}
