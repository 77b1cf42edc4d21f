use std::env;
use std::path::PathBuf;

const DEFAULT_STORE_PATH: &str = ".data/fundtrack.db";
const DEFAULT_LOG_FILTER: &str = "fundtrack=info";

pub const STORE_ENV: &str = "FUNDTRACK_STORE";
pub const LOG_ENV: &str = "FUNDTRACK_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite file holding the key/value store.
    pub store_path: PathBuf,
    /// `tracing-subscriber` env-filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Blank values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            store_path: non_blank(STORE_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            log_filter: non_blank(LOG_ENV).unwrap_or(defaults.log_filter),
        }
    }
}
