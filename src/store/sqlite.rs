//! SQLite-backed ledger

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::ledger::{LedgerStore, StoreError};

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Backend {
            reason: err.to_string(),
        }
    }
}

/// Durable ledger keeping one row per key
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create the ledger database
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).with_context(|| format!("open db {}", path.display()))?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory db")?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// Number of keys on the ledger
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM ledger", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS ledger (
                key   TEXT PRIMARY KEY,
                value BLOB NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl LedgerStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM ledger WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO ledger(key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_db(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("ledger_contracts_{}_{}.db", name, std::process::id()));
        path
    }

    #[test]
    fn test_get_put() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("alice").unwrap(), None);

        store.put("alice", b"{}").unwrap();
        store.put("alice", b"[]").unwrap();
        assert_eq!(store.get("alice").unwrap(), Some(b"[]".to_vec()));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_db("reopen");
        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.put("contracts", br#"["alice"]"#).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get("contracts").unwrap(),
            Some(br#"["alice"]"#.to_vec())
        );

        std::fs::remove_file(path).ok();
    }
}
