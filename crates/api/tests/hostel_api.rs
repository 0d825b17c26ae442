//! Integration test for the seeded hostel listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

/// The migrations seed eight hostels; the listing returns them all.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_hostels(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/hostel/list").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let hostels = json["hostels"].as_array().unwrap();
    assert_eq!(hostels.len(), 8);
    assert_eq!(hostels[0]["name"], "Hostel 1");
    assert!(hostels[0]["capacity"].is_number());
}
