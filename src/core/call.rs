//! Parser for named calls arriving from the host

use crate::domain::contract::{Contract, ContractRegistry, Operation, RegistryError, Surface};
use crate::domain::ledger::LedgerStore;

/// Parse a `(function, args)` call arriving on `surface`
///
/// Names a surface does not serve become [`Operation::Unknown`]; the
/// registry decides what to do with them. Arity is checked here, so a
/// returned operation always carries the right number of values.
pub fn parse_call(
    surface: Surface,
    function: &str,
    args: &[String],
) -> Result<Operation, RegistryError> {
    match (surface, function) {
        // The init surface has a single entry point whatever it is called.
        (Surface::Init, _) => contract_args("init", args).map(Operation::Initialize),

        (Surface::Invoke, "create_contract") => {
            contract_args(function, args).map(Operation::CreateContract)
        }
        (Surface::Invoke, "transaction") => match args {
            [customer, period, status] => Ok(Operation::Transaction {
                customer: customer.clone(),
                period: period.clone(),
                status: status.clone(),
            }),
            _ => Err(RegistryError::arity(function, "3", args.len())),
        },

        (Surface::Query, "read") => match args {
            [key] => Ok(Operation::Read { key: key.clone() }),
            _ => Err(RegistryError::arity(function, "1", args.len())),
        },
        // Arguments are ignored.
        (Surface::Query, "list_contracts") => Ok(Operation::ListContracts),

        _ => Ok(Operation::Unknown {
            surface,
            name: function.to_string(),
        }),
    }
}

fn contract_args(function: &str, args: &[String]) -> Result<Contract, RegistryError> {
    Contract::from_args(args).ok_or_else(|| RegistryError::arity(function, "4", args.len()))
}

/// Parse and execute one call
pub fn dispatch<S: LedgerStore + ?Sized>(
    registry: &ContractRegistry,
    store: &mut S,
    surface: Surface,
    function: &str,
    args: &[String],
) -> Result<Option<Vec<u8>>, RegistryError> {
    tracing::debug!(%surface, function, "dispatching");
    let operation = parse_call(surface, function, args)?;
    registry.execute(store, operation)
}
