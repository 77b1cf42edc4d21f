use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::lenient;

/// Legacy name-only tag. New data should use teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Id<Group>,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub created_at: NaiveDate,
}

impl Group {
    pub fn create(name: String, created_at: NaiveDate) -> Self {
        Self {
            id: Id::generate(),
            name,
            created_at,
        }
    }
}
