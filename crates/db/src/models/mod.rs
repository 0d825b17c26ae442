//! Row structs (`FromRow`) and request DTOs, one module per table.

pub mod attendance;
pub mod complaint;
pub mod hostel;
pub mod invoice;
pub mod mess_off;
pub mod slot_booking;
pub mod student;
pub mod user;
