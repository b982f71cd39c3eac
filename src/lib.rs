//! Contract registry layered on a single-key ledger store.
//!
//! Records live under their customer key; the list of every created key is
//! kept by hand under [`domain::contract::INDEX_KEY`].

pub mod config;
pub mod core;
pub mod domain;
pub mod store;

pub use crate::core::{dispatch, parse_call};
pub use config::Config;
pub use domain::contract::{
    Contract, ContractRegistry, DuplicatePolicy, Operation, RegistryError, Surface,
    UnknownInvokePolicy, INDEX_KEY,
};
pub use domain::ledger::{LedgerStore, StoreError};
pub use store::{MemoryStore, SqliteStore};
