//! Registry error types

use thiserror::Error;

use super::Surface;
use crate::domain::ledger::StoreError;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Call carried the wrong number of arguments
    #[error("incorrect number of arguments for '{function}': expected {expected}, got {got}")]
    InvalidArgumentCount {
        function: String,
        expected: &'static str,
        got: usize,
    },

    /// Ledger read failed
    #[error("failed to get state for '{key}'")]
    StoreRead {
        key: String,
        #[source]
        source: StoreError,
    },

    /// Ledger write failed
    #[error("failed to put state for '{key}'")]
    StoreWrite {
        key: String,
        #[source]
        source: StoreError,
    },

    /// Record could not be serialized
    #[error("failed to encode record")]
    Encoding(#[source] serde_json::Error),

    /// Stored bytes are not a valid record or index
    #[error("failed to decode state for '{key}'")]
    Decoding {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Function name not served on this surface
    #[error("received unknown function {surface}: {name}")]
    UnknownFunction {
        surface: Surface,
        name: String,
    },

    /// Customer already listed in the index
    #[error("contract for customer '{customer}' already exists")]
    DuplicateContract { customer: String },
}

impl RegistryError {
    pub(crate) fn arity(function: &str, expected: &'static str, got: usize) -> Self {
        RegistryError::InvalidArgumentCount {
            function: function.to_string(),
            expected,
            got,
        }
    }

    pub(crate) fn unknown(surface: Surface, name: &str) -> Self {
        RegistryError::UnknownFunction {
            surface,
            name: name.to_string(),
        }
    }
}
