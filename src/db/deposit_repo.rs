use crate::db::collections;
use crate::db::store::KeyValueStore;
use crate::error::FundResult;
use crate::model::{Deposit, Fund, Id, Member};

pub fn insert(store: &dyn KeyValueStore, deposit: Deposit) -> FundResult<Deposit> {
    collections::insert(store, deposit)
}

pub fn update(store: &dyn KeyValueStore, deposit: &Deposit) -> FundResult<bool> {
    collections::replace(store, deposit)
}

pub fn delete(store: &dyn KeyValueStore, deposit_id: Id<Deposit>) -> FundResult<bool> {
    collections::remove(store, deposit_id)
}

pub fn save_all(store: &dyn KeyValueStore, deposits: &[Deposit]) -> FundResult<()> {
    collections::save(store, deposits)
}

pub fn find_all(store: &dyn KeyValueStore) -> Vec<Deposit> {
    collections::load(store)
}

/// Like `find_all`, but fails instead of reading an unparseable collection as
/// empty. Use before `save_all`.
pub fn find_all_for_update(store: &dyn KeyValueStore) -> FundResult<Vec<Deposit>> {
    collections::load_for_update(store)
}

pub fn find_by_id(store: &dyn KeyValueStore, id: Id<Deposit>) -> Option<Deposit> {
    collections::find_by_id(store, id)
}

/// Deposits of one member, newest first.
pub fn find_by_member(store: &dyn KeyValueStore, member_id: Id<Member>) -> Vec<Deposit> {
    let mut deposits: Vec<Deposit> = find_all(store)
        .into_iter()
        .filter(|d| d.member_id == member_id)
        .collect();
    deposits.sort_by(|a, b| b.date.cmp(&a.date));
    deposits
}

pub fn find_by_fund(store: &dyn KeyValueStore, fund_id: Id<Fund>) -> Vec<Deposit> {
    find_all(store)
        .into_iter()
        .filter(|d| d.fund_id == fund_id)
        .collect()
}
