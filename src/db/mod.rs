pub mod schema;
pub mod store;
pub mod collections;
pub mod member_repo;
pub mod fund_repo;
pub mod team_repo;
pub mod group_repo;
pub mod deposit_repo;
pub mod withdrawal_repo;

pub use store::{KeyValueStore, MemoryStore, SqliteStore};
