use chrono::NaiveDate;

use crate::db::store::KeyValueStore;
use crate::db::{fund_repo, member_repo, team_repo};
use crate::error::FundResult;
use crate::model::{Id, Team};

pub fn add_team(store: &dyn KeyValueStore, name: &str, today: NaiveDate) -> FundResult<Team> {
    let team = team_repo::insert(store, Team::create(name.trim().to_string(), today))?;
    tracing::info!(team_id = %team.id, name = %team.name, "team added");
    Ok(team)
}

/// Renames a team. Returns `false` if it does not exist.
pub fn rename_team(store: &dyn KeyValueStore, team_id: Id<Team>, name: &str) -> FundResult<bool> {
    let mut teams = team_repo::find_all_for_update(store)?;
    match teams.iter_mut().find(|t| t.id == team_id) {
        Some(team) => team.name = name.trim().to_string(),
        None => return Ok(false),
    }
    team_repo::save_all(store, &teams)?;
    Ok(true)
}

/// Deletes a team and removes its id from every member and fund.
pub fn delete_team(store: &dyn KeyValueStore, team_id: Id<Team>) -> FundResult<bool> {
    if !team_repo::delete(store, team_id)? {
        return Ok(false);
    }

    let mut members = member_repo::find_all_for_update(store)?;
    if members.iter().any(|m| m.is_in_team(team_id)) {
        for member in members.iter_mut() {
            member.team_ids.retain(|id| *id != team_id);
        }
        member_repo::save_all(store, &members)?;
    }

    let mut funds = fund_repo::find_all_for_update(store)?;
    if funds.iter().any(|f| f.team_ids.contains(&team_id)) {
        for fund in funds.iter_mut() {
            fund.team_ids.retain(|id| *id != team_id);
        }
        fund_repo::save_all(store, &funds)?;
    }

    tracing::info!(%team_id, "team deleted");
    Ok(true)
}
