use crate::db::collections;
use crate::db::store::KeyValueStore;
use crate::error::FundResult;
use crate::model::{Fund, Id, Withdrawal};

pub fn insert(store: &dyn KeyValueStore, withdrawal: Withdrawal) -> FundResult<Withdrawal> {
    collections::insert(store, withdrawal)
}

pub fn delete(store: &dyn KeyValueStore, withdrawal_id: Id<Withdrawal>) -> FundResult<bool> {
    collections::remove(store, withdrawal_id)
}

pub fn save_all(store: &dyn KeyValueStore, withdrawals: &[Withdrawal]) -> FundResult<()> {
    collections::save(store, withdrawals)
}

pub fn find_all(store: &dyn KeyValueStore) -> Vec<Withdrawal> {
    collections::load(store)
}

/// Like `find_all`, but fails instead of reading an unparseable collection as
/// empty. Use before `save_all`.
pub fn find_all_for_update(store: &dyn KeyValueStore) -> FundResult<Vec<Withdrawal>> {
    collections::load_for_update(store)
}

pub fn find_by_fund(store: &dyn KeyValueStore, fund_id: Id<Fund>) -> Vec<Withdrawal> {
    find_all(store)
        .into_iter()
        .filter(|w| w.fund_id == fund_id)
        .collect()
}
