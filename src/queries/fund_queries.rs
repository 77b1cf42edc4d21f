use crate::db::store::KeyValueStore;
use crate::db::{deposit_repo, fund_repo, member_repo, withdrawal_repo};
use crate::model::{Deposit, Fund, Id, Member, Withdrawal};

#[derive(Debug, Clone)]
pub struct FundBalance {
    pub fund: Fund,
    pub deposited: f64,
    pub withdrawn: f64,
    pub balance: f64,
}

/// Received deposits minus withdrawals for one fund. Can go negative.
pub fn balance_of(fund_id: Id<Fund>, deposits: &[Deposit], withdrawals: &[Withdrawal]) -> (f64, f64) {
    let deposited: f64 = deposits
        .iter()
        .filter(|d| d.fund_id == fund_id && d.status.is_received())
        .map(|d| d.amount)
        .sum();
    let withdrawn: f64 = withdrawals
        .iter()
        .filter(|w| w.fund_id == fund_id)
        .map(|w| w.amount)
        .sum();
    (deposited, withdrawn)
}

pub fn box_balance(store: &dyn KeyValueStore, fund_id: Id<Fund>) -> f64 {
    let (deposited, withdrawn) = balance_of(
        fund_id,
        &deposit_repo::find_by_fund(store, fund_id),
        &withdrawal_repo::find_by_fund(store, fund_id),
    );
    deposited - withdrawn
}

/// Balances of every fund, in stored order.
pub fn box_balances(store: &dyn KeyValueStore) -> Vec<FundBalance> {
    let deposits = deposit_repo::find_all(store);
    let withdrawals = withdrawal_repo::find_all(store);

    fund_repo::find_all(store)
        .into_iter()
        .map(|fund| {
            let (deposited, withdrawn) = balance_of(fund.id, &deposits, &withdrawals);
            FundBalance {
                fund,
                deposited,
                withdrawn,
                balance: deposited - withdrawn,
            }
        })
        .collect()
}

/// Funds the member is enrolled in that still exist.
pub fn funds_for_member(store: &dyn KeyValueStore, member_id: Id<Member>) -> Vec<Fund> {
    let member = match member_repo::find_by_id(store, member_id) {
        Some(m) => m,
        None => return Vec::new(),
    };
    fund_repo::find_all(store)
        .into_iter()
        .filter(|f| member.is_enrolled_in(f.id))
        .collect()
}
