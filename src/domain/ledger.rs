//! Ledger store trait and error type

use thiserror::Error;

/// Failure reported by a ledger backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backend failed (storage, connection, etc).
    #[error("ledger failure: {reason}")]
    Backend {
        /// Description of the backend failure.
        reason: String,
    },
    /// Backend refused access to the key.
    #[error("ledger unavailable for key '{key}'")]
    Unavailable { key: String },
}

/// Single-key access to the host ledger
///
/// The ledger offers no transactions, batches or scans. Anything that spans
/// more than one key has to be maintained by the caller.
pub trait LedgerStore {
    /// Fetch the bytes stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(bytes))` - The key holds a value
    /// * `Ok(None)` - Nothing was ever written to the key
    /// * `Err(...)` - The backend could not be read
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}
