//! Status vocabulary shared by handlers and repositories.
//!
//! Statuses are stored as plain strings; these constants and validators
//! keep the spellings in one place.

/// Request statuses (leave requests, slot bookings, invoices).
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// Invoice paid status.
pub const STATUS_PAID: &str = "paid";

/// Attendance statuses.
pub const STATUS_PRESENT: &str = "present";
pub const STATUS_ABSENT: &str = "absent";

/// Complaint statuses.
pub const STATUS_OPEN: &str = "open";
pub const STATUS_SOLVED: &str = "solved";

/// Whether `status` is a valid attendance status.
pub fn is_attendance_status(status: &str) -> bool {
    status == STATUS_PRESENT || status == STATUS_ABSENT
}

/// Whether `status` is a valid decision for a pending request
/// (leave request or slot booking).
pub fn is_decision_status(status: &str) -> bool {
    status == STATUS_APPROVED || status == STATUS_REJECTED
}

/// Whether `status` is a valid invoice status.
pub fn is_invoice_status(status: &str) -> bool {
    status == STATUS_PENDING || status == STATUS_PAID || status == STATUS_APPROVED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_statuses() {
        assert!(is_attendance_status(STATUS_PRESENT));
        assert!(is_attendance_status(STATUS_ABSENT));
        assert!(!is_attendance_status("late"));
    }

    #[test]
    fn decision_statuses() {
        assert!(is_decision_status(STATUS_APPROVED));
        assert!(is_decision_status(STATUS_REJECTED));
        assert!(!is_decision_status(STATUS_PENDING));
    }

    #[test]
    fn invoice_statuses() {
        assert!(is_invoice_status(STATUS_PENDING));
        assert!(is_invoice_status(STATUS_PAID));
        assert!(!is_invoice_status(STATUS_SOLVED));
    }
}
