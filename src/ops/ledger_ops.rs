use chrono::NaiveDate;

use crate::db::store::KeyValueStore;
use crate::db::{deposit_repo, withdrawal_repo};
use crate::error::FundResult;
use crate::model::{Deposit, DepositStatus, Fund, Id, Member, Withdrawal};
use crate::validation::{self, trim_optional};

pub fn add_deposit(
    store: &dyn KeyValueStore,
    member_id: Id<Member>,
    fund_id: Id<Fund>,
    amount: f64,
    date: NaiveDate,
    status: DepositStatus,
    notes: Option<&str>,
) -> FundResult<Deposit> {
    let deposit = Deposit::create(
        member_id,
        fund_id,
        validation::non_negative_amount(amount),
        date,
        status,
        trim_optional(notes),
    );
    let deposit = deposit_repo::insert(store, deposit)?;
    tracing::info!(deposit_id = %deposit.id, %member_id, %fund_id, amount = deposit.amount, "deposit added");
    Ok(deposit)
}

pub fn update_deposit_status(
    store: &dyn KeyValueStore,
    deposit_id: Id<Deposit>,
    status: DepositStatus,
) -> FundResult<bool> {
    let mut deposit = match deposit_repo::find_by_id(store, deposit_id) {
        Some(d) => d,
        None => return Ok(false),
    };
    deposit.status = status;
    deposit_repo::update(store, &deposit)
}

pub fn delete_deposit(store: &dyn KeyValueStore, deposit_id: Id<Deposit>) -> FundResult<bool> {
    deposit_repo::delete(store, deposit_id)
}

pub fn add_withdrawal(
    store: &dyn KeyValueStore,
    fund_id: Id<Fund>,
    amount: f64,
    date: NaiveDate,
    notes: Option<&str>,
) -> FundResult<Withdrawal> {
    let withdrawal = Withdrawal::create(
        fund_id,
        validation::non_negative_amount(amount),
        date,
        trim_optional(notes),
    );
    let withdrawal = withdrawal_repo::insert(store, withdrawal)?;
    tracing::info!(withdrawal_id = %withdrawal.id, %fund_id, amount = withdrawal.amount, "withdrawal added");
    Ok(withdrawal)
}

pub fn delete_withdrawal(
    store: &dyn KeyValueStore,
    withdrawal_id: Id<Withdrawal>,
) -> FundResult<bool> {
    withdrawal_repo::delete(store, withdrawal_id)
}
