use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::schema;
use crate::error::{FundError, FundResult};

/// Flat, durable key/value storage holding one JSON document per key.
///
/// All access happens from a single logical writer, so implementations take
/// `&self` and need no locking.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> FundResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> FundResult<()>;
    fn remove(&self, key: &str) -> FundResult<()>;
    fn clear(&self) -> FundResult<()>;
}

/// SQLite-backed store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> FundResult<Self> {
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> FundResult<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> FundResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| FundError::StoreRead {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    fn set(&self, key: &str, value: &str) -> FundResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
            params![key, value],
        )
        .map_err(|e| FundError::StoreWrite {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> FundResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn clear(&self) -> FundResult<()> {
        self.conn.execute("DELETE FROM kv_store", [])?;
        Ok(())
    }
}

/// In-memory store for tests. Writes can be made to fail on demand.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn check_writable(&self, key: &str) -> FundResult<()> {
        if self.fail_writes.get() {
            return Err(FundError::StoreWrite {
                key: key.to_string(),
                reason: "quota exceeded".into(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FundResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FundResult<()> {
        self.check_writable(key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> FundResult<()> {
        self.check_writable(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> FundResult<()> {
        self.check_writable("*")?;
        self.entries.borrow_mut().clear();
        Ok(())
    }
}
