use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fund::Fund;
use super::ids::Id;
use super::lenient;
use super::member::Member;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepositStatus {
    Completed,
    Late,
    #[default]
    Unpaid,
}

impl DepositStatus {
    pub const ALL: &'static [DepositStatus] = &[
        DepositStatus::Completed,
        DepositStatus::Late,
        DepositStatus::Unpaid,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DepositStatus::Completed => "Completed",
            DepositStatus::Late => "Late",
            DepositStatus::Unpaid => "Unpaid",
        }
    }

    /// Whether the money actually reached the fund.
    pub fn is_received(&self) -> bool {
        match self {
            DepositStatus::Completed | DepositStatus::Late => true,
            DepositStatus::Unpaid => false,
        }
    }
}

/// Money a member put (or owes) into a fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub id: Id<Deposit>,
    pub member_id: Id<Member>,
    pub fund_id: Id<Fund>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: DepositStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Deposit {
    pub fn create(
        member_id: Id<Member>,
        fund_id: Id<Fund>,
        amount: f64,
        date: NaiveDate,
        status: DepositStatus,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Id::generate(),
            member_id,
            fund_id,
            amount,
            date,
            status,
            notes,
        }
    }
}

/// Money taken out of a fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub id: Id<Withdrawal>,
    pub fund_id: Id<Fund>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Withdrawal {
    pub fn create(fund_id: Id<Fund>, amount: f64, date: NaiveDate, notes: Option<String>) -> Self {
        Self {
            id: Id::generate(),
            fund_id,
            amount,
            date,
            notes,
        }
    }
}
