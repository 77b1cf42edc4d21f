use crate::db::collections;
use crate::db::store::KeyValueStore;
use crate::error::FundResult;
use crate::model::{Group, Id};

pub fn delete(store: &dyn KeyValueStore, group_id: Id<Group>) -> FundResult<bool> {
    collections::remove(store, group_id)
}

pub fn save_all(store: &dyn KeyValueStore, groups: &[Group]) -> FundResult<()> {
    collections::save(store, groups)
}

pub fn find_all(store: &dyn KeyValueStore) -> Vec<Group> {
    collections::load(store)
}

/// Like `find_all`, but fails instead of reading an unparseable collection as
/// empty. Use before `save_all`.
pub fn find_all_for_update(store: &dyn KeyValueStore) -> FundResult<Vec<Group>> {
    collections::load_for_update(store)
}

pub fn find_by_id(store: &dyn KeyValueStore, id: Id<Group>) -> Option<Group> {
    collections::find_by_id(store, id)
}

pub fn insert(store: &dyn KeyValueStore, group: Group) -> FundResult<Group> {
    collections::insert(store, group)
}
