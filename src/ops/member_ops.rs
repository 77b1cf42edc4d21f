use chrono::NaiveDate;

use crate::db::store::KeyValueStore;
use crate::db::{deposit_repo, member_repo, team_repo};
use crate::error::FundResult;
use crate::model::{FinancialStatus, Fund, Id, JobStatus, Member, PaymentRecord, Team};
use crate::validation;

/// Fields supplied when registering a member. Validation is the caller's job.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub name: String,
    pub team_ids: Vec<Id<Team>>,
    pub fund_ids: Vec<Id<Fund>>,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub financial_status: FinancialStatus,
    pub job_status: JobStatus,
}

impl NewMember {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            team_ids: Vec::new(),
            fund_ids: Vec::new(),
            phone: String::new(),
            birth_date: None,
            financial_status: FinancialStatus::Moderate,
            job_status: JobStatus::Employed,
        }
    }

    /// Builds a member from raw form text, rejecting a blank name.
    pub fn from_form(name: &str, phone: &str) -> FundResult<Self> {
        let mut fields = Self::named(&validation::required("name", name)?);
        fields.phone = phone.trim().to_string();
        Ok(fields)
    }
}

/// Partial update of a member. `None` leaves a field as it is; list fields
/// replace the stored list wholesale.
#[derive(Debug, Clone, Default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub team_ids: Option<Vec<Id<Team>>>,
    pub fund_ids: Option<Vec<Id<Fund>>>,
    pub phone: Option<String>,
    pub birth_date: Option<Option<NaiveDate>>,
    pub financial_status: Option<FinancialStatus>,
    pub job_status: Option<JobStatus>,
}

impl MemberPatch {
    fn apply(self, member: &mut Member) {
        if let Some(name) = self.name {
            member.name = name.trim().to_string();
        }
        if let Some(team_ids) = self.team_ids {
            member.team_ids = dedup(team_ids);
        }
        if let Some(fund_ids) = self.fund_ids {
            member.fund_ids = dedup(fund_ids);
        }
        if let Some(phone) = self.phone {
            member.phone = phone.trim().to_string();
        }
        if let Some(birth_date) = self.birth_date {
            member.birth_date = birth_date;
        }
        if let Some(financial_status) = self.financial_status {
            member.financial_status = financial_status;
        }
        if let Some(job_status) = self.job_status {
            member.job_status = job_status;
        }
    }
}

/// Registers a member joining on `today` with an empty payment history.
pub fn add_member(
    store: &dyn KeyValueStore,
    fields: NewMember,
    today: NaiveDate,
) -> FundResult<Member> {
    let mut member = Member::create(fields.name.trim().to_string(), today);
    member.team_ids = dedup(fields.team_ids);
    member.fund_ids = dedup(fields.fund_ids);
    member.phone = fields.phone.trim().to_string();
    member.birth_date = fields.birth_date;
    member.financial_status = fields.financial_status;
    member.job_status = fields.job_status;

    let member = member_repo::insert(store, member)?;
    sync_team_rosters(store, member.id, &member.team_ids)?;

    tracing::info!(member_id = %member.id, name = %member.name, "member added");
    Ok(member)
}

/// Merges `patch` into the stored member. Returns `false` if the member
/// does not exist.
pub fn update_member(
    store: &dyn KeyValueStore,
    member_id: Id<Member>,
    patch: MemberPatch,
) -> FundResult<bool> {
    let mut member = match member_repo::find_by_id(store, member_id) {
        Some(m) => m,
        None => {
            tracing::debug!(%member_id, "update skipped, member not found");
            return Ok(false);
        }
    };

    let teams_changed = patch.team_ids.is_some();
    patch.apply(&mut member);

    if !member_repo::update(store, &member)? {
        return Ok(false);
    }
    if teams_changed {
        sync_team_rosters(store, member.id, &member.team_ids)?;
    }
    Ok(true)
}

/// Deletes a member, dropping it from every team roster and deleting its
/// deposits.
pub fn delete_member(store: &dyn KeyValueStore, member_id: Id<Member>) -> FundResult<bool> {
    if !member_repo::delete(store, member_id)? {
        return Ok(false);
    }

    sync_team_rosters(store, member_id, &[])?;

    let mut deposits = deposit_repo::find_all_for_update(store)?;
    let before = deposits.len();
    deposits.retain(|d| d.member_id != member_id);
    if deposits.len() != before {
        deposit_repo::save_all(store, &deposits)?;
    }

    tracing::info!(
        %member_id,
        deposits_removed = before - deposits.len(),
        "member deleted"
    );
    Ok(true)
}

/// Appends a payment to the member's history. Earlier records are never
/// touched.
pub fn record_payment(
    store: &dyn KeyValueStore,
    member_id: Id<Member>,
    fund_id: Id<Fund>,
    date: NaiveDate,
) -> FundResult<bool> {
    let mut member = match member_repo::find_by_id(store, member_id) {
        Some(m) => m,
        None => return Ok(false),
    };

    member.payment_history.push(PaymentRecord::new(fund_id, date));
    let saved = member_repo::update(store, &member)?;
    if saved {
        tracing::info!(%member_id, %fund_id, %date, "payment recorded");
    }
    Ok(saved)
}

/// Enrolls the member in a fund if not already enrolled.
pub fn enroll_in_fund(
    store: &dyn KeyValueStore,
    member_id: Id<Member>,
    fund_id: Id<Fund>,
) -> FundResult<bool> {
    let mut member = match member_repo::find_by_id(store, member_id) {
        Some(m) => m,
        None => return Ok(false),
    };

    if member.is_enrolled_in(fund_id) {
        return Ok(true);
    }
    member.fund_ids.push(fund_id);
    member_repo::update(store, &member)
}

/// Makes every team's roster agree with `team_ids` for one member: the
/// member is listed in exactly those teams.
fn sync_team_rosters(
    store: &dyn KeyValueStore,
    member_id: Id<Member>,
    team_ids: &[Id<Team>],
) -> FundResult<()> {
    let mut teams = team_repo::find_all_for_update(store)?;
    let mut changed = false;

    for team in teams.iter_mut() {
        let listed = team.member_ids.contains(&member_id);
        let wanted = team_ids.contains(&team.id);
        if wanted && !listed {
            team.member_ids.push(member_id);
            changed = true;
        } else if !wanted && listed {
            team.member_ids.retain(|id| *id != member_id);
            changed = true;
        }
    }

    if changed {
        team_repo::save_all(store, &teams)?;
    }
    Ok(())
}

fn dedup<T: PartialEq>(ids: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
