use chrono::NaiveDate;

use crate::db::store::KeyValueStore;
use crate::db::{fund_repo, member_repo};
use crate::model::{Fund, Id, Member, PaymentStatus, Team};
use crate::queries::payment_queries;
use crate::status;

/// Member list filter. Unset dimensions match everyone; set dimensions are
/// combined with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberFilter {
    pub team_id: Option<Id<Team>>,
    pub fund_id: Option<Id<Fund>>,
    pub status: Option<PaymentStatus>,
}

impl MemberFilter {
    pub fn is_empty(&self) -> bool {
        self.team_id.is_none() && self.fund_id.is_none() && self.status.is_none()
    }
}

/// Applies `filter` to `members`, keeping their order.
///
/// A status filter is checked against the filtered fund when one is set,
/// otherwise against any of the member's funds.
pub fn filter_members(
    members: &[Member],
    funds: &[Fund],
    filter: &MemberFilter,
    today: NaiveDate,
) -> Vec<Member> {
    if filter.is_empty() {
        return members.to_vec();
    }

    members
        .iter()
        .filter(|m| filter.team_id.map_or(true, |team_id| m.is_in_team(team_id)))
        .filter(|m| filter.fund_id.map_or(true, |fund_id| m.is_enrolled_in(fund_id)))
        .filter(|m| match filter.status {
            None => true,
            Some(wanted) => match filter.fund_id {
                Some(fund_id) => {
                    let fund = funds.iter().find(|f| f.id == fund_id);
                    status::payment_status(Some(*m), fund, today) == wanted
                }
                None => payment_queries::statuses_for(m, funds, today)
                    .iter()
                    .any(|(_, s)| *s == wanted),
            },
        })
        .cloned()
        .collect()
}

pub fn members_matching(
    store: &dyn KeyValueStore,
    filter: &MemberFilter,
    today: NaiveDate,
) -> Vec<Member> {
    let members = member_repo::find_all(store);
    let funds = fund_repo::find_all(store);
    filter_members(&members, &funds, filter, today)
}

pub fn members_in_team(store: &dyn KeyValueStore, team_id: Id<Team>) -> Vec<Member> {
    member_repo::find_by_team(store, team_id)
}

pub fn members_in_fund(store: &dyn KeyValueStore, fund_id: Id<Fund>) -> Vec<Member> {
    member_repo::find_by_fund(store, fund_id)
}

pub fn find_by_name(store: &dyn KeyValueStore, query: &str) -> Vec<Member> {
    member_repo::find_by_name(store, query)
}
