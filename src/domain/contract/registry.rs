//! Contract registry - keeps records and the index consistent over a
//! single-key ledger

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::codec::{decode_contract, decode_index, encode_contract, encode_index};
use super::{Contract, Operation, RegistryError, Surface};
use crate::domain::ledger::LedgerStore;

/// Ledger key holding the encoded list of every created customer key
pub const INDEX_KEY: &str = "contracts";

/// What `create_contract` does when the customer is already indexed or
/// already has a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Overwrite the record and append the key again
    #[default]
    Append,
    /// Fail before any write
    Reject,
    /// Overwrite the record and collapse the index to one entry per key
    Dedupe,
}

/// What a mutating call with an unrecognized name does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownInvokePolicy {
    /// Fail with `UnknownFunction`, same as the query surface
    #[default]
    Reject,
    /// Return nothing and write nothing
    Ignore,
}

/// Registry over a ledger passed in per call
///
/// Holds only policy. Every operation rebuilds what it needs from the store
/// and assumes calls are serialized by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractRegistry {
    duplicates: DuplicatePolicy,
    unknown_invoke: UnknownInvokePolicy,
}

impl ContractRegistry {
    pub fn new(duplicates: DuplicatePolicy, unknown_invoke: UnknownInvokePolicy) -> Self {
        Self {
            duplicates,
            unknown_invoke,
        }
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    pub fn unknown_invoke_policy(&self) -> UnknownInvokePolicy {
        self.unknown_invoke
    }

    /// Run one operation against `store`
    ///
    /// Mutating operations return `Ok(None)`; reads return the raw bytes.
    pub fn execute<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        operation: Operation,
    ) -> Result<Option<Vec<u8>>, RegistryError> {
        debug!(
            function = operation.name(),
            mutating = operation.is_mutating(),
            "executing"
        );
        match operation {
            Operation::Initialize(contract) => self.initialize(store, &contract).map(|_| None),
            Operation::CreateContract(contract) => {
                self.create_contract(store, &contract).map(|_| None)
            }
            Operation::Transaction {
                customer,
                period,
                status,
            } => self
                .transaction(store, &customer, &period, &status)
                .map(|_| None),
            Operation::Read { key } => self.read(&*store, &key).map(Some),
            Operation::ListContracts => self.list_contracts(&*store).map(Some),
            Operation::Unknown { surface, name } => match (surface, self.unknown_invoke) {
                (Surface::Invoke, UnknownInvokePolicy::Ignore) => {
                    warn!(function = %name, "ignoring unknown invoke function");
                    Ok(None)
                }
                _ => Err(RegistryError::unknown(surface, &name)),
            },
        }
    }

    /// Write the first record and reset the index to contain only its key
    ///
    /// Any previous index is discarded, not merged.
    pub fn initialize<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        contract: &Contract,
    ) -> Result<(), RegistryError> {
        put(store, &contract.customer, &encode_contract(contract)?)?;
        put(
            store,
            INDEX_KEY,
            &encode_index(std::slice::from_ref(&contract.customer))?,
        )?;
        info!(customer = %contract.customer, "ledger initialized");
        Ok(())
    }

    /// Append the customer to the index, then write its record
    ///
    /// The two writes are not atomic. If the record write fails the index
    /// already lists the customer and nothing repairs it.
    pub fn create_contract<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        contract: &Contract,
    ) -> Result<(), RegistryError> {
        let mut index = self.load_index(&*store)?;
        let indexed = index.contains(&contract.customer);

        match self.duplicates {
            DuplicatePolicy::Append => {
                if indexed {
                    warn!(customer = %contract.customer, "appending duplicate index entry");
                }
                index.push(contract.customer.clone());
                put(store, INDEX_KEY, &encode_index(&index)?)?;
            }
            DuplicatePolicy::Reject => {
                // A record can exist without an index entry after a re-initialize.
                if indexed || has_record(&*store, &contract.customer)? {
                    return Err(RegistryError::DuplicateContract {
                        customer: contract.customer.clone(),
                    });
                }
                index.push(contract.customer.clone());
                put(store, INDEX_KEY, &encode_index(&index)?)?;
            }
            DuplicatePolicy::Dedupe => {
                if indexed || has_record(&*store, &contract.customer)? {
                    warn!(customer = %contract.customer, "overwriting existing contract");
                }
                let before = index.len();
                let mut seen = HashSet::new();
                index.retain(|key| seen.insert(key.clone()));
                if !indexed {
                    index.push(contract.customer.clone());
                }
                if !indexed || index.len() != before {
                    put(store, INDEX_KEY, &encode_index(&index)?)?;
                }
            }
        }

        put(store, &contract.customer, &encode_contract(contract)?)?;
        info!(customer = %contract.customer, index_len = index.len(), "contract created");
        Ok(())
    }

    /// Replace period and status of the record under `customer`
    ///
    /// Fails with `Decoding` when no record exists. The index is not read.
    pub fn transaction<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        customer: &str,
        period: &str,
        status: &str,
    ) -> Result<(), RegistryError> {
        let bytes = get(&*store, customer)?;
        let mut contract = decode_contract(customer, &bytes)?;
        contract.transact(period, status);
        debug!(customer, period, status, "transacting contract");

        put(store, customer, &encode_contract(&contract)?)?;
        info!(customer, "contract updated");
        Ok(())
    }

    /// Raw bytes under `key`, empty when nothing was written
    pub fn read<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        key: &str,
    ) -> Result<Vec<u8>, RegistryError> {
        get(store, key)
    }

    /// Raw bytes of the index
    pub fn list_contracts<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Vec<u8>, RegistryError> {
        get(store, INDEX_KEY)
    }

    /// Decoded record under `customer`
    pub fn contract<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        customer: &str,
    ) -> Result<Contract, RegistryError> {
        decode_contract(customer, &get(store, customer)?)
    }

    /// Decoded index; fails with `Decoding` before initialization
    pub fn load_index<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Vec<String>, RegistryError> {
        decode_index(INDEX_KEY, &get(store, INDEX_KEY)?)
    }
}

fn get<S: LedgerStore + ?Sized>(store: &S, key: &str) -> Result<Vec<u8>, RegistryError> {
    store
        .get(key)
        .map(Option::unwrap_or_default)
        .map_err(|source| RegistryError::StoreRead {
            key: key.to_string(),
            source,
        })
}

fn has_record<S: LedgerStore + ?Sized>(store: &S, key: &str) -> Result<bool, RegistryError> {
    Ok(!get(store, key)?.is_empty())
}

fn put<S: LedgerStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: &[u8],
) -> Result<(), RegistryError> {
    store
        .put(key, value)
        .map_err(|source| RegistryError::StoreWrite {
            key: key.to_string(),
            source,
        })
}
