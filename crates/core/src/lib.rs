//! Pure domain logic for the hostel management backend.
//!
//! No I/O lives here: billing math, the status vocabulary, shared id and
//! timestamp aliases, and the domain error taxonomy. The `hms-db` and
//! `hms-api` crates build on these types.

pub mod billing;
pub mod error;
pub mod status;
pub mod types;
