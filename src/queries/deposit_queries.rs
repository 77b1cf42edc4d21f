use crate::db::store::KeyValueStore;
use crate::db::{deposit_repo, member_repo};
use crate::model::{Deposit, DepositStatus, Fund, Id, Member, Team};

/// Deposit list filter; set dimensions are combined with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepositFilter {
    pub team_id: Option<Id<Team>>,
    pub fund_id: Option<Id<Fund>>,
    pub member_id: Option<Id<Member>>,
    pub status: Option<DepositStatus>,
}

/// Applies `filter` to `deposits`, keeping their order. The team filter
/// goes through the depositing member; deposits whose member is gone never
/// match it.
pub fn filter_deposits(
    deposits: &[Deposit],
    members: &[Member],
    filter: &DepositFilter,
) -> Vec<Deposit> {
    deposits
        .iter()
        .filter(|d| filter.fund_id.map_or(true, |id| d.fund_id == id))
        .filter(|d| filter.member_id.map_or(true, |id| d.member_id == id))
        .filter(|d| filter.status.map_or(true, |s| d.status == s))
        .filter(|d| {
            filter.team_id.map_or(true, |team_id| {
                members
                    .iter()
                    .find(|m| m.id == d.member_id)
                    .map_or(false, |m| m.is_in_team(team_id))
            })
        })
        .cloned()
        .collect()
}

pub fn deposits_matching(store: &dyn KeyValueStore, filter: &DepositFilter) -> Vec<Deposit> {
    let deposits = deposit_repo::find_all(store);
    let members = member_repo::find_all(store);
    filter_deposits(&deposits, &members, filter)
}

pub fn deposits_for_member(store: &dyn KeyValueStore, member_id: Id<Member>) -> Vec<Deposit> {
    deposit_repo::find_by_member(store, member_id)
}
