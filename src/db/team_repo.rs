use crate::db::collections;
use crate::db::store::KeyValueStore;
use crate::error::FundResult;
use crate::model::{Id, Team};

pub fn insert(store: &dyn KeyValueStore, team: Team) -> FundResult<Team> {
    collections::insert(store, team)
}

pub fn delete(store: &dyn KeyValueStore, team_id: Id<Team>) -> FundResult<bool> {
    collections::remove(store, team_id)
}

pub fn save_all(store: &dyn KeyValueStore, teams: &[Team]) -> FundResult<()> {
    collections::save(store, teams)
}

pub fn find_all(store: &dyn KeyValueStore) -> Vec<Team> {
    collections::load(store)
}

/// Like `find_all`, but fails instead of reading an unparseable collection as
/// empty. Use before `save_all`.
pub fn find_all_for_update(store: &dyn KeyValueStore) -> FundResult<Vec<Team>> {
    collections::load_for_update(store)
}

pub fn find_by_id(store: &dyn KeyValueStore, id: Id<Team>) -> Option<Team> {
    collections::find_by_id(store, id)
}

pub fn find_by_name(store: &dyn KeyValueStore, name: &str) -> Option<Team> {
    find_all(store)
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}
