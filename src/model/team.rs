use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::lenient;
use super::member::Member;

/// A cohort of members. `member_ids` mirrors `Member::team_ids` and is kept
/// in sync by the member and team operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Id<Team>,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub created_at: NaiveDate,
    #[serde(default)]
    pub member_ids: Vec<Id<Member>>,
}

impl Team {
    pub fn create(name: String, created_at: NaiveDate) -> Self {
        Self {
            id: Id::generate(),
            name,
            created_at,
            member_ids: Vec::new(),
        }
    }
}
