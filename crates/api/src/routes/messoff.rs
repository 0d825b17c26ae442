//! Route definitions for the `/messoff` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::messoff;
use crate::state::AppState;

/// Routes mounted at `/messoff`.
///
/// ```text
/// POST /request  -> file a leave request
/// POST /count    -> this month's requests + approved day total
/// POST /list     -> pending list + month counts for a hostel
/// POST /update   -> decide a pending request (bearer)
/// GET  /all      -> all requests partitioned by status (bearer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/request", post(messoff::request))
        .route("/count", post(messoff::count))
        .route("/list", post(messoff::list))
        .route("/update", post(messoff::update))
        .route("/all", get(messoff::all))
}
