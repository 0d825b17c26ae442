//! Route definitions for the `/attendance` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// Routes mounted at `/attendance`.
///
/// ```text
/// POST /mark     -> mark today's attendance (409 on duplicate)
/// POST /get      -> a student's records
/// POST /update   -> update today's record (404 if none)
/// POST /hostel   -> today's records for a hostel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mark", post(attendance::mark))
        .route("/get", post(attendance::get))
        .route("/update", post(attendance::update))
        .route("/hostel", post(attendance::by_hostel))
}
