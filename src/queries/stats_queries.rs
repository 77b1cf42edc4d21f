use chrono::NaiveDate;

use crate::db::store::KeyValueStore;
use crate::db::{deposit_repo, fund_repo, group_repo, member_repo, team_repo, withdrawal_repo};
use crate::model::PaymentStatus;
use crate::queries::{fund_queries, payment_queries};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_members: usize,
    pub total_funds: usize,
    pub total_teams: usize,
    pub total_groups: usize,
    /// Members counted by their overall status.
    pub members_completed: usize,
    pub members_pending: usize,
    pub members_unpaid: usize,
    pub members_delayed: usize,
    /// Sum of all fund balances.
    pub total_balance: f64,
}

pub fn dashboard(store: &dyn KeyValueStore, today: NaiveDate) -> DashboardStats {
    let members = member_repo::find_all(store);
    let funds = fund_repo::find_all(store);
    let deposits = deposit_repo::find_all(store);
    let withdrawals = withdrawal_repo::find_all(store);

    let mut stats = DashboardStats {
        total_members: members.len(),
        total_funds: funds.len(),
        total_teams: team_repo::find_all(store).len(),
        total_groups: group_repo::find_all(store).len(),
        ..Default::default()
    };

    for member in &members {
        match payment_queries::overall_for(member, &funds, today) {
            PaymentStatus::Completed => stats.members_completed += 1,
            PaymentStatus::Pending => stats.members_pending += 1,
            PaymentStatus::Unpaid => stats.members_unpaid += 1,
            PaymentStatus::Delayed => stats.members_delayed += 1,
            PaymentStatus::Unknown => {}
        }
    }

    stats.total_balance = funds
        .iter()
        .map(|f| {
            let (deposited, withdrawn) = fund_queries::balance_of(f.id, &deposits, &withdrawals);
            deposited - withdrawn
        })
        .sum();

    stats
}
