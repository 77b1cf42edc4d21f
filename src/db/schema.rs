use rusqlite::Connection;

use crate::error::FundResult;

/// Initialize the key/value table backing the store.
pub fn initialize(conn: &Connection) -> FundResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;
    Ok(())
}
