//! Domain layer - registry semantics independent of any storage backend
//!
//! This layer contains:
//! - The ledger store seam (single-key get/put)
//! - Contract records, their codec and the registry protocol

pub mod contract;
pub mod ledger;
