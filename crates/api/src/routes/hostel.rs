//! Route definitions for the `/hostel` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::hostel;
use crate::state::AppState;

/// Routes mounted at `/hostel`.
pub fn router() -> Router<AppState> {
    Router::new().route("/list", get(hostel::list))
}
