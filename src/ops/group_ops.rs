use chrono::NaiveDate;

use crate::db::group_repo;
use crate::db::store::KeyValueStore;
use crate::error::FundResult;
use crate::model::{Group, Id};
use crate::validation;

pub fn add_group(store: &dyn KeyValueStore, name: &str, today: NaiveDate) -> FundResult<Group> {
    group_repo::insert(store, Group::create(name.trim().to_string(), today))
}

pub fn delete_group(store: &dyn KeyValueStore, group_id: Id<Group>) -> FundResult<bool> {
    group_repo::delete(store, group_id)
}

/// Adds one group per non-blank line of `text` and returns how many were
/// added. The collection is written once.
pub fn import_groups_from_text(
    store: &dyn KeyValueStore,
    text: &str,
    today: NaiveDate,
) -> FundResult<usize> {
    let names = validation::non_blank_lines(text);
    if names.is_empty() {
        return Ok(0);
    }

    let added = names.len();
    let mut groups = group_repo::find_all_for_update(store)?;
    groups.extend(names.into_iter().map(|name| Group::create(name, today)));
    group_repo::save_all(store, &groups)?;

    tracing::info!(added, "groups imported");
    Ok(added)
}
