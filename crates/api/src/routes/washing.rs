//! Route definitions for the `/washingmachine` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::washing;
use crate::state::AppState;

/// Routes mounted at `/washingmachine`.
///
/// ```text
/// POST /request  -> book a slot (400 if taken)
/// POST /list     -> pending list + month counts for a hostel
/// POST /update   -> decide a booking (bearer)
/// GET  /all      -> all bookings partitioned by status (bearer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/request", post(washing::request))
        .route("/list", post(washing::list))
        .route("/update", post(washing::update))
        .route("/all", get(washing::all))
}
