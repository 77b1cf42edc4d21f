use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fund::Fund;
use super::ids::Id;
use super::lenient;
use super::team::Team;

/// How comfortably a member can keep up with contributions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancialStatus {
    Affluent,
    #[default]
    Moderate,
    Difficult,
}

impl FinancialStatus {
    pub const ALL: &'static [FinancialStatus] = &[
        FinancialStatus::Affluent,
        FinancialStatus::Moderate,
        FinancialStatus::Difficult,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FinancialStatus::Affluent => "Affluent",
            FinancialStatus::Moderate => "Moderate",
            FinancialStatus::Difficult => "Difficult",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Employed,
    Unemployed,
    Retired,
}

impl JobStatus {
    pub const ALL: &'static [JobStatus] = &[
        JobStatus::Employed,
        JobStatus::Unemployed,
        JobStatus::Retired,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            JobStatus::Employed => "Employed",
            JobStatus::Unemployed => "Unemployed",
            JobStatus::Retired => "Retired",
        }
    }
}

/// One completed payment of a member into a fund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub fund_id: Id<Fund>,
    pub date: NaiveDate,
}

impl PaymentRecord {
    pub fn new(fund_id: Id<Fund>, date: NaiveDate) -> Self {
        Self { fund_id, date }
    }
}

/// A contributing member. `payment_history` keeps entry order, which is not
/// necessarily date order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Id<Member>,
    pub name: String,
    #[serde(default)]
    pub team_ids: Vec<Id<Team>>,
    #[serde(default)]
    pub fund_ids: Vec<Id<Fund>>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::optional_date")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub financial_status: FinancialStatus,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub job_status: JobStatus,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub join_date: NaiveDate,
    #[serde(default)]
    pub payment_history: Vec<PaymentRecord>,
}

impl Member {
    pub fn create(name: String, join_date: NaiveDate) -> Self {
        Self {
            id: Id::generate(),
            name,
            team_ids: Vec::new(),
            fund_ids: Vec::new(),
            phone: String::new(),
            birth_date: None,
            financial_status: FinancialStatus::default(),
            job_status: JobStatus::default(),
            join_date,
            payment_history: Vec::new(),
        }
    }

    pub fn is_in_team(&self, team_id: Id<Team>) -> bool {
        self.team_ids.contains(&team_id)
    }

    pub fn is_enrolled_in(&self, fund_id: Id<Fund>) -> bool {
        self.fund_ids.contains(&fund_id)
    }

    /// The payment consulted for status derivation: the first record for
    /// `fund_id` in stored order, regardless of its date.
    pub fn payment_for(&self, fund_id: Id<Fund>) -> Option<&PaymentRecord> {
        self.payment_history.iter().find(|p| p.fund_id == fund_id)
    }
}
