use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::db::collections;
use crate::db::store::{KeyValueStore, MemoryStore, SqliteStore};
use crate::db::{fund_repo, member_repo, team_repo};
use crate::error::FundResult;
use crate::model::{Fund, Member, Team};

/// Owns the store for the lifetime of the application and hands it to the
/// ops and queries layers.
pub struct FundContext {
    store: Box<dyn KeyValueStore>,
}

impl FundContext {
    /// Opens (creating if needed) the SQLite store named by `config` and
    /// makes sure every collection key exists.
    pub fn open(config: &Config) -> FundResult<Self> {
        if let Some(dir) = config.store_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let store = SqliteStore::open(&config.store_path)?;
        tracing::info!(path = %config.store_path.display(), "store opened");
        Self::with_store(Box::new(store))
    }

    pub fn in_memory() -> FundResult<Self> {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    pub fn with_store(store: Box<dyn KeyValueStore>) -> FundResult<Self> {
        collections::initialize(store.as_ref())?;
        Ok(Self { store })
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Wipes every collection and re-creates them empty.
    pub fn reset(&self) -> FundResult<()> {
        self.store.clear()?;
        collections::initialize(self.store())?;
        tracing::info!("store reset");
        Ok(())
    }

    /// Finds a member by name. An exact (case-insensitive) match wins over
    /// several partial matches; otherwise the match must be unique.
    pub fn find_member(&self, query: &str) -> Option<Member> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let matches = member_repo::find_by_name(self.store(), query);
        match matches.len() {
            0 => None,
            1 => matches.into_iter().next(),
            _ => matches
                .into_iter()
                .find(|m| m.name.eq_ignore_ascii_case(query)),
        }
    }

    pub fn find_fund(&self, name: &str) -> Option<Fund> {
        fund_repo::find_by_name(self.store(), name)
    }

    pub fn find_team(&self, name: &str) -> Option<Team> {
        team_repo::find_by_name(self.store(), name)
    }
}
