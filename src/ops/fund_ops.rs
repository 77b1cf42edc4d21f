use chrono::NaiveDate;

use crate::db::store::KeyValueStore;
use crate::db::{deposit_repo, fund_repo, member_repo, withdrawal_repo};
use crate::error::FundResult;
use crate::model::{Frequency, Fund, Id, Team};
use crate::schedule;
use crate::validation;

#[derive(Debug, Clone)]
pub struct NewFund {
    pub name: String,
    pub amount: f64,
    pub team_ids: Vec<Id<Team>>,
    pub frequency: Option<Frequency>,
}

impl NewFund {
    pub fn new(name: &str, amount: f64, frequency: Option<Frequency>) -> Self {
        Self {
            name: name.to_string(),
            amount,
            team_ids: Vec::new(),
            frequency,
        }
    }

    /// Builds a fund from raw form text. The amount is coerced (garbage and
    /// negatives become 0) and an unknown frequency is left unset.
    pub fn from_form(name: &str, amount: &str, frequency: &str) -> FundResult<Self> {
        Ok(Self::new(
            &validation::required("name", name)?,
            validation::parse_amount(amount),
            Frequency::from_db_str(&frequency.to_lowercase()),
        ))
    }
}

/// Partial update of a fund.
///
/// `next_due_date: Some(value)` is an explicit edit of the due date and
/// wins over any recomputation, including `Some(None)` to clear it.
#[derive(Debug, Clone, Default)]
pub struct FundPatch {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub team_ids: Option<Vec<Id<Team>>>,
    pub frequency: Option<Option<Frequency>>,
    pub next_due_date: Option<Option<NaiveDate>>,
}

impl FundPatch {
    /// Merges the patch into `fund`, deciding the due date:
    /// an explicit due date is kept as given; otherwise a frequency change
    /// recomputes it from `today`; otherwise an unset due date is filled in.
    fn apply(self, fund: &mut Fund, today: NaiveDate) {
        if let Some(name) = self.name {
            fund.name = name.trim().to_string();
        }
        if let Some(amount) = self.amount {
            fund.amount = validation::non_negative_amount(amount);
        }
        if let Some(team_ids) = self.team_ids {
            fund.team_ids = team_ids;
        }

        let frequency_changed = match self.frequency {
            Some(frequency) if frequency != fund.frequency => {
                fund.frequency = frequency;
                true
            }
            _ => false,
        };

        match self.next_due_date {
            Some(explicit) => fund.next_due_date = explicit,
            None if frequency_changed || fund.next_due_date.is_none() => {
                fund.next_due_date = Some(schedule::next_due_date(fund.frequency, today));
            }
            None => {}
        }
    }
}

/// Creates a fund whose first due date is one cycle after `today`.
pub fn add_box(store: &dyn KeyValueStore, fields: NewFund, today: NaiveDate) -> FundResult<Fund> {
    let mut fund = Fund::create(
        fields.name.trim().to_string(),
        validation::non_negative_amount(fields.amount),
        fields.frequency,
        today,
    );
    fund.team_ids = fields.team_ids;
    fund.next_due_date = Some(schedule::next_due_date(fund.frequency, today));

    let fund = fund_repo::insert(store, fund)?;
    tracing::info!(fund_id = %fund.id, name = %fund.name, due = ?fund.next_due_date, "fund added");
    Ok(fund)
}

/// Merges `patch` into the stored fund. Returns `false` if the fund does not
/// exist.
pub fn update_box(
    store: &dyn KeyValueStore,
    fund_id: Id<Fund>,
    patch: FundPatch,
    today: NaiveDate,
) -> FundResult<bool> {
    let mut fund = match fund_repo::find_by_id(store, fund_id) {
        Some(f) => f,
        None => {
            tracing::debug!(%fund_id, "update skipped, fund not found");
            return Ok(false);
        }
    };

    patch.apply(&mut fund, today);
    fund_repo::update(store, &fund)
}

/// Recomputes the due date from the fund's frequency and `today`,
/// regardless of the current value.
pub fn update_box_due_date(
    store: &dyn KeyValueStore,
    fund_id: Id<Fund>,
    today: NaiveDate,
) -> FundResult<bool> {
    let mut fund = match fund_repo::find_by_id(store, fund_id) {
        Some(f) => f,
        None => return Ok(false),
    };

    fund.next_due_date = Some(schedule::next_due_date(fund.frequency, today));
    let saved = fund_repo::update(store, &fund)?;
    if saved {
        tracing::info!(%fund_id, due = ?fund.next_due_date, "fund due date rolled forward");
    }
    Ok(saved)
}

/// Deletes a fund, unenrolling every member and deleting the deposits and
/// withdrawals booked against it. Payment history is left as recorded.
pub fn delete_box(store: &dyn KeyValueStore, fund_id: Id<Fund>) -> FundResult<bool> {
    if !fund_repo::delete(store, fund_id)? {
        return Ok(false);
    }

    let mut members = member_repo::find_all_for_update(store)?;
    let mut unenrolled = 0usize;
    for member in members.iter_mut() {
        if member.is_enrolled_in(fund_id) {
            member.fund_ids.retain(|id| *id != fund_id);
            unenrolled += 1;
        }
    }
    if unenrolled > 0 {
        member_repo::save_all(store, &members)?;
    }

    let mut deposits = deposit_repo::find_all_for_update(store)?;
    let deposit_count = deposits.len();
    deposits.retain(|d| d.fund_id != fund_id);
    if deposits.len() != deposit_count {
        deposit_repo::save_all(store, &deposits)?;
    }

    let mut withdrawals = withdrawal_repo::find_all_for_update(store)?;
    let withdrawal_count = withdrawals.len();
    withdrawals.retain(|w| w.fund_id != fund_id);
    if withdrawals.len() != withdrawal_count {
        withdrawal_repo::save_all(store, &withdrawals)?;
    }

    tracing::info!(
        %fund_id,
        unenrolled,
        deposits_removed = deposit_count - deposits.len(),
        withdrawals_removed = withdrawal_count - withdrawals.len(),
        "fund deleted"
    );
    Ok(true)
}
