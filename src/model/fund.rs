use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::lenient;
use super::team::Team;

/// How often a fund expects a contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    pub const ALL: &'static [Frequency] = &[
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Annual,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Annual => "Annual",
        }
    }

    /// Parse from the stored string form. Unknown values yield `None`.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim() {
            "monthly" => Some(Frequency::Monthly),
            "quarterly" => Some(Frequency::Quarterly),
            "annual" => Some(Frequency::Annual),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Annual => "annual",
        }
    }

    /// Calendar months per cycle.
    pub fn months(&self) -> u32 {
        match self {
            Frequency::Monthly => 1,
            Frequency::Quarterly => 3,
            Frequency::Annual => 12,
        }
    }
}

/// A recurring collection pool ("box").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub id: Id<Fund>,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub amount: f64,
    #[serde(default)]
    pub team_ids: Vec<Id<Team>>,
    #[serde(default, deserialize_with = "lenient::frequency")]
    pub frequency: Option<Frequency>,
    #[serde(default, deserialize_with = "lenient::optional_date")]
    pub next_due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub created_at: NaiveDate,
}

impl Fund {
    pub fn create(
        name: String,
        amount: f64,
        frequency: Option<Frequency>,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id: Id::generate(),
            name,
            amount,
            team_ids: Vec::new(),
            frequency,
            next_due_date: None,
            created_at,
        }
    }
}
