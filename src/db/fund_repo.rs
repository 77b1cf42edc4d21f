use crate::db::collections;
use crate::db::store::KeyValueStore;
use crate::error::FundResult;
use crate::model::{Fund, Id, Team};

pub fn insert(store: &dyn KeyValueStore, fund: Fund) -> FundResult<Fund> {
    collections::insert(store, fund)
}

pub fn update(store: &dyn KeyValueStore, fund: &Fund) -> FundResult<bool> {
    collections::replace(store, fund)
}

pub fn delete(store: &dyn KeyValueStore, fund_id: Id<Fund>) -> FundResult<bool> {
    collections::remove(store, fund_id)
}

pub fn save_all(store: &dyn KeyValueStore, funds: &[Fund]) -> FundResult<()> {
    collections::save(store, funds)
}

pub fn find_all(store: &dyn KeyValueStore) -> Vec<Fund> {
    collections::load(store)
}

/// Like `find_all`, but fails instead of reading an unparseable collection as
/// empty. Use before `save_all`.
pub fn find_all_for_update(store: &dyn KeyValueStore) -> FundResult<Vec<Fund>> {
    collections::load_for_update(store)
}

pub fn find_by_id(store: &dyn KeyValueStore, id: Id<Fund>) -> Option<Fund> {
    collections::find_by_id(store, id)
}

pub fn find_by_team(store: &dyn KeyValueStore, team_id: Id<Team>) -> Vec<Fund> {
    find_all(store)
        .into_iter()
        .filter(|f| f.team_ids.contains(&team_id))
        .collect()
}

pub fn find_by_name(store: &dyn KeyValueStore, name: &str) -> Option<Fund> {
    find_all(store)
        .into_iter()
        .find(|f| f.name.eq_ignore_ascii_case(name.trim()))
}
