use std::collections::HashMap;

use chrono::NaiveDate;

use crate::db::store::KeyValueStore;
use crate::db::{fund_repo, member_repo};
use crate::model::{Fund, Id, Member, PaymentStatus};
use crate::status;

/// Status of `member` in each fund it is enrolled in, in enrollment order.
/// Enrolled funds that no longer exist come back as `Unknown`.
pub fn statuses_for(
    member: &Member,
    funds: &[Fund],
    today: NaiveDate,
) -> Vec<(Id<Fund>, PaymentStatus)> {
    member
        .fund_ids
        .iter()
        .map(|fund_id| {
            let fund = funds.iter().find(|f| f.id == *fund_id);
            (*fund_id, status::payment_status(Some(member), fund, today))
        })
        .collect()
}

pub fn calculate_payment_status(
    store: &dyn KeyValueStore,
    member_id: Id<Member>,
    fund_id: Id<Fund>,
    today: NaiveDate,
) -> PaymentStatus {
    let member = member_repo::find_by_id(store, member_id);
    let fund = fund_repo::find_by_id(store, fund_id);
    status::payment_status(member.as_ref(), fund.as_ref(), today)
}

/// Per-fund statuses of one member. Unknown members yield an empty map.
pub fn member_payment_status(
    store: &dyn KeyValueStore,
    member_id: Id<Member>,
    today: NaiveDate,
) -> HashMap<Id<Fund>, PaymentStatus> {
    let member = match member_repo::find_by_id(store, member_id) {
        Some(m) => m,
        None => return HashMap::new(),
    };
    let funds = fund_repo::find_all(store);
    statuses_for(&member, &funds, today).into_iter().collect()
}

pub fn member_overall_status(
    store: &dyn KeyValueStore,
    member_id: Id<Member>,
    today: NaiveDate,
) -> PaymentStatus {
    match member_repo::find_by_id(store, member_id) {
        Some(member) => {
            let funds = fund_repo::find_all(store);
            overall_for(&member, &funds, today)
        }
        None => PaymentStatus::Unknown,
    }
}

pub fn overall_for(member: &Member, funds: &[Fund], today: NaiveDate) -> PaymentStatus {
    status::member_overall_status(statuses_for(member, funds, today).into_iter().map(|(_, s)| s))
}
