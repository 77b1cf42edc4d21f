use crate::db::collections;
use crate::db::store::KeyValueStore;
use crate::error::FundResult;
use crate::model::{Fund, Id, Member, Team};

pub fn insert(store: &dyn KeyValueStore, member: Member) -> FundResult<Member> {
    collections::insert(store, member)
}

pub fn update(store: &dyn KeyValueStore, member: &Member) -> FundResult<bool> {
    collections::replace(store, member)
}

pub fn delete(store: &dyn KeyValueStore, member_id: Id<Member>) -> FundResult<bool> {
    collections::remove(store, member_id)
}

pub fn save_all(store: &dyn KeyValueStore, members: &[Member]) -> FundResult<()> {
    collections::save(store, members)
}

pub fn find_all(store: &dyn KeyValueStore) -> Vec<Member> {
    collections::load(store)
}

/// Like `find_all`, but fails instead of reading an unparseable collection as
/// empty. Use before `save_all`.
pub fn find_all_for_update(store: &dyn KeyValueStore) -> FundResult<Vec<Member>> {
    collections::load_for_update(store)
}

pub fn find_by_id(store: &dyn KeyValueStore, id: Id<Member>) -> Option<Member> {
    collections::find_by_id(store, id)
}

pub fn find_by_team(store: &dyn KeyValueStore, team_id: Id<Team>) -> Vec<Member> {
    find_all(store)
        .into_iter()
        .filter(|m| m.is_in_team(team_id))
        .collect()
}

pub fn find_by_fund(store: &dyn KeyValueStore, fund_id: Id<Fund>) -> Vec<Member> {
    find_all(store)
        .into_iter()
        .filter(|m| m.is_enrolled_in(fund_id))
        .collect()
}

/// Case-insensitive substring match on the member name.
pub fn find_by_name(store: &dyn KeyValueStore, query: &str) -> Vec<Member> {
    let lower = query.trim().to_lowercase();
    find_all(store)
        .into_iter()
        .filter(|m| m.name.to_lowercase().contains(&lower))
        .collect()
}
