//! Mess billing math: calendar-month windows, leave-day accounting, and
//! invoice proration.
//!
//! Bills are generated in arrears: an invoice generated in month M charges
//! for every day of month M-1, minus the daily rate for each day of
//! approved leave attributed to that billing month. A leave request is
//! attributed to the month its return date falls in, matched by month
//! number alone (see [`qualifies_for_billing_month`]).

use chrono::{Datelike, Months, NaiveDate};

use crate::status::STATUS_APPROVED;
use crate::types::{DbId, Timestamp};

/// Milliseconds per day, used by the whole-day span arithmetic.
pub const MS_PER_DAY: i64 = 86_400_000;

// ---------------------------------------------------------------------------
// Time-range utility
// ---------------------------------------------------------------------------

/// First day of `reference`'s month and first day of the following month.
///
/// The pair forms an inclusive-exclusive window for "this month" queries
/// and for the billing period.
pub fn month_bounds(reference: Timestamp) -> (NaiveDate, NaiveDate) {
    let date = reference.date_naive();
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("first of month is always a valid date");
    let next = first
        .checked_add_months(Months::new(1))
        .expect("month arithmetic does not overflow for real dates");
    (first, next)
}

/// Calendar day-count of the month before `reference`'s month.
///
/// This is the billing period length: invoices generated in month M bill
/// for month M-1.
pub fn days_in_previous_month(reference: Timestamp) -> i64 {
    let (first, _) = month_bounds(reference);
    let prev_first = first
        .checked_sub_months(Months::new(1))
        .expect("month arithmetic does not overflow for real dates");
    (first - prev_first).num_days()
}

/// Month number (1-12) of the billing month for an invoice generated at
/// `reference`, i.e. the month before `reference`'s month.
pub fn billing_month(reference: Timestamp) -> u32 {
    let (first, _) = month_bounds(reference);
    first
        .checked_sub_months(Months::new(1))
        .expect("month arithmetic does not overflow for real dates")
        .month()
}

/// Whole-day difference between two instants: millisecond difference
/// divided by [`MS_PER_DAY`], truncated toward zero.
///
/// All timestamps in this system are UTC, so this reproduces the legacy
/// arithmetic exactly while staying immune to daylight-saving transitions.
pub fn day_span(start: Timestamp, end: Timestamp) -> i64 {
    (end - start).num_milliseconds() / MS_PER_DAY
}

/// [`day_span`] over calendar dates, taken at midnight UTC.
pub fn day_span_dates(start: NaiveDate, end: NaiveDate) -> i64 {
    let start = start
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc();
    let end = end
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc();
    day_span(start, end)
}

// ---------------------------------------------------------------------------
// Leave attribution
// ---------------------------------------------------------------------------

/// An approved leave interval considered for proration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveInterval {
    pub leaving_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Whether a leave request counts against the given billing month.
///
/// The rule is deliberately narrow: the request must be approved and its
/// *return date* must fall in a month with the same month number as the
/// billing month. The leaving date is never consulted, the year is never
/// compared, and interval overlap with the billing window is not checked.
/// A leave straddling a month boundary is attributed entirely to its
/// return month; a leave contained in an earlier month is excluded even
/// when its leaving date sits inside the billing month.
pub fn qualifies_for_billing_month(
    status: &str,
    return_date: NaiveDate,
    billing_month: u32,
) -> bool {
    status == STATUS_APPROVED && return_date.month() == billing_month
}

// ---------------------------------------------------------------------------
// Proration
// ---------------------------------------------------------------------------

/// Net monthly charge: `rate x days` minus `rate x day_span(leaving, return)`
/// for each qualifying leave interval.
///
/// No floor is applied; enough leave days produce a negative amount.
pub fn prorate(daily_rate: i64, days_in_month: i64, intervals: &[LeaveInterval]) -> i64 {
    let mut amount = daily_rate * days_in_month;
    for interval in intervals {
        amount -= daily_rate * day_span_dates(interval.leaving_date, interval.return_date);
    }
    amount
}

// ---------------------------------------------------------------------------
// Batch outcome
// ---------------------------------------------------------------------------

/// A per-student failure recorded while generating a batch of invoices.
///
/// Carries enough context (student id, cause) for the caller to retry
/// selectively.
#[derive(Debug, Clone, serde::Serialize)]
pub struct InvoiceFailure {
    pub student_id: DbId,
    pub cause: String,
}

/// Fold of an invoice generation run: successful inserts and per-student
/// failures. Failures never abort the batch.
#[derive(Debug, Default, serde::Serialize)]
pub struct BatchOutcome {
    pub created: u64,
    pub failures: Vec<InvoiceFailure>,
}

impl BatchOutcome {
    /// Record one successfully persisted invoice.
    pub fn record_success(&mut self) {
        self.created += 1;
    }

    /// Record a failed insert for one student.
    pub fn record_failure(&mut self, student_id: DbId, cause: String) {
        self.failures.push(InvoiceFailure { student_id, cause });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
