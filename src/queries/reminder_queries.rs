use chrono::NaiveDate;

use crate::db::store::KeyValueStore;
use crate::db::{fund_repo, member_repo};
use crate::messaging;
use crate::model::{Fund, Member, PaymentStatus};
use crate::status;

/// A ready-to-send reminder for one member and one fund.
#[derive(Debug, Clone)]
pub struct PaymentReminder {
    pub member: Member,
    pub fund: Fund,
    pub status: PaymentStatus,
    /// Messaging address; empty when the member has no usable phone.
    pub phone: String,
    pub message: String,
}

/// Every (member, fund) pair that is unpaid or delayed on `today`.
/// Delayed reminders come first, then by member name.
pub fn pending_reminders(store: &dyn KeyValueStore, today: NaiveDate) -> Vec<PaymentReminder> {
    let members = member_repo::find_all(store);
    let funds = fund_repo::find_all(store);
    let mut results = Vec::new();

    for member in &members {
        for fund_id in &member.fund_ids {
            let fund = match funds.iter().find(|f| f.id == *fund_id) {
                Some(f) => f,
                None => continue,
            };
            let status = status::payment_status(Some(member), Some(fund), today);
            if !status.needs_reminder() {
                continue;
            }
            results.push(PaymentReminder {
                member: member.clone(),
                fund: fund.clone(),
                status,
                phone: messaging::format_phone_for_messaging(&member.phone),
                message: messaging::generate_message(&member.name, &fund.name, status),
            });
        }
    }

    results.sort_by(|a, b| {
        b.status
            .severity()
            .cmp(&a.status.severity())
            .then_with(|| a.member.name.cmp(&b.member.name))
    });

    results
}
