//! Route definitions for the `/complaint` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::complaint;
use crate::state::AppState;

/// Routes mounted at `/complaint`.
///
/// ```text
/// POST /register  -> register a complaint
/// POST /hostel    -> complaints by hostel
/// POST /student   -> complaints by student
/// POST /resolve   -> mark a complaint solved
/// GET  /all       -> all complaints partitioned by status (bearer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(complaint::register))
        .route("/hostel", post(complaint::by_hostel))
        .route("/student", post(complaint::by_student))
        .route("/resolve", post(complaint::resolve))
        .route("/all", get(complaint::all))
}
