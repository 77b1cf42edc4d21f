//! Payment status derivation.
//!
//! Everything here is a pure function of the member's payment history, the
//! fund's due date and the `today` passed in by the caller.

use chrono::NaiveDate;

use crate::model::{Fund, Member, PaymentStatus};

/// Derives where `member` stands against `fund` on `today`.
///
/// Rules, first match wins:
/// 1. member or fund missing: `Unknown`
/// 2. no payment for the fund: `Unpaid` once past due, else `Pending`
/// 3. payment on or after the due date: `Completed`
/// 4. payment before the due date: `Delayed` once past due, else `Pending`
///
/// Only the first payment for the fund in stored order is consulted.
/// A fund without a due date is never past due, and any payment settles it.
pub fn payment_status(
    member: Option<&Member>,
    fund: Option<&Fund>,
    today: NaiveDate,
) -> PaymentStatus {
    let (member, fund) = match (member, fund) {
        (Some(m), Some(f)) => (m, f),
        _ => return PaymentStatus::Unknown,
    };

    let due = fund.next_due_date;
    let past_due = due.map_or(false, |due| today > due);

    match member.payment_for(fund.id) {
        None if past_due => PaymentStatus::Unpaid,
        None => PaymentStatus::Pending,
        Some(payment) => match due {
            None => PaymentStatus::Completed,
            Some(due) if payment.date >= due => PaymentStatus::Completed,
            Some(_) if past_due => PaymentStatus::Delayed,
            Some(_) => PaymentStatus::Pending,
        },
    }
}

/// Folds per-fund statuses into one: `Delayed` > `Unpaid` > `Pending` >
/// `Completed`. No statuses at all (no enrolled funds) counts as `Completed`.
pub fn member_overall_status<I>(statuses: I) -> PaymentStatus
where
    I: IntoIterator<Item = PaymentStatus>,
{
    statuses
        .into_iter()
        .filter(|s| *s != PaymentStatus::Unknown)
        .max_by_key(|s| s.severity())
        .unwrap_or(PaymentStatus::Completed)
}
