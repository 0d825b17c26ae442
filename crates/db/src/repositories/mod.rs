//! Repositories: one unit struct per table with static async methods
//! taking a `&PgPool`.

pub mod attendance_repo;
pub mod complaint_repo;
pub mod hostel_repo;
pub mod invoice_repo;
pub mod mess_off_repo;
pub mod slot_booking_repo;
pub mod student_repo;
pub mod user_repo;

pub use attendance_repo::AttendanceRepo;
pub use complaint_repo::ComplaintRepo;
pub use hostel_repo::HostelRepo;
pub use invoice_repo::InvoiceRepo;
pub use mess_off_repo::MessOffRepo;
pub use slot_booking_repo::SlotBookingRepo;
pub use student_repo::StudentRepo;
pub use user_repo::UserRepo;
