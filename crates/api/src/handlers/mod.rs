//! HTTP handlers, one module per resource.

pub mod attendance;
pub mod auth;
pub mod complaint;
pub mod health;
pub mod hostel;
pub mod invoice;
pub mod messoff;
pub mod student;
pub mod washing;
