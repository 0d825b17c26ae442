//! Route definitions for the `/student` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/student`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(student::register))
        .route("/get-all", post(student::get_all))
        .route("/update", post(student::update))
}
