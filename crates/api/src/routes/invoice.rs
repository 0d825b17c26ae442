//! Route definitions for the `/invoice` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::invoice;
use crate::state::AppState;

/// Routes mounted at `/invoice`.
///
/// ```text
/// POST /generate  -> batch generation (400 if already generated)
/// POST /student   -> a student's invoices
/// POST /getbyid   -> a hostel roster's invoices
/// POST /update    -> set current-month invoice status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(invoice::generate))
        .route("/student", post(invoice::by_student))
        .route("/getbyid", post(invoice::by_hostel))
        .route("/update", post(invoice::update))
}
