pub mod attendance;
pub mod auth;
pub mod complaint;
pub mod health;
pub mod hostel;
pub mod invoice;
pub mod messoff;
pub mod student;
pub mod washing;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                     login (public)
///
/// /student/register               register (public)
/// /student/get-all                roster by hostel
/// /student/update                 update metadata by CMS id
///
/// /hostel/list                    seeded hostels
///
/// /attendance/mark                mark today's attendance
/// /attendance/get                 a student's records
/// /attendance/update              update today's record
/// /attendance/hostel              today's records per hostel
///
/// /invoice/generate               batch invoice generation
/// /invoice/student                a student's invoices
/// /invoice/getbyid                a hostel roster's invoices
/// /invoice/update                 set current-month invoice status
///
/// /messoff/request                file a leave request
/// /messoff/count                  this month's requests + approved days
/// /messoff/list                   pending list + month counts per hostel
/// /messoff/update                 decide a pending request (bearer)
/// /messoff/all                    all requests by status (bearer)
///
/// /washingmachine/request         book a slot
/// /washingmachine/list            pending list + month counts per hostel
/// /washingmachine/update          decide a booking (bearer)
/// /washingmachine/all             all bookings by status (bearer)
///
/// /complaint/register             register a complaint
/// /complaint/hostel               complaints by hostel
/// /complaint/student              complaints by student
/// /complaint/resolve              mark a complaint solved
/// /complaint/all                  all complaints by status (bearer)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/student", student::router())
        .nest("/hostel", hostel::router())
        .nest("/attendance", attendance::router())
        .nest("/invoice", invoice::router())
        .nest("/messoff", messoff::router())
        .nest("/washingmachine", washing::router())
        .nest("/complaint", complaint::router())
}
