//! Contract records and the registry that maintains them
//!
//! Persisted layout: [`INDEX_KEY`] holds the encoded index, every other key
//! is a customer name holding that customer's encoded [`Contract`].

pub mod codec;
mod error;
mod operation;
mod record;
mod registry;

pub use error::RegistryError;
pub use operation::{Operation, Surface};
pub use record::Contract;
pub use registry::{ContractRegistry, DuplicatePolicy, UnknownInvokePolicy, INDEX_KEY};
