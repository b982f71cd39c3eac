//! Typed registry operations and the surfaces they arrive on

use std::fmt;

use super::Contract;

/// Entry surface a call arrives on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// One-shot bootstrap of the ledger
    Init,
    /// Mutating calls
    Invoke,
    /// Read-only calls
    Query,
}

impl Surface {
    pub fn as_str(self) -> &'static str {
        match self {
            Surface::Init => "init",
            Surface::Invoke => "invoke",
            Surface::Query => "query",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registry call with its arguments already shaped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Write the first record and reset the index to it
    Initialize(Contract),
    /// Append to the index, then write the record
    CreateContract(Contract),
    /// Replace period and status of an existing record
    Transaction {
        customer: String,
        period: String,
        status: String,
    },
    /// Raw bytes under any key
    Read { key: String },
    /// Raw bytes of the index
    ListContracts,
    /// Function name not served by the surface it arrived on
    Unknown { surface: Surface, name: String },
}

impl Operation {
    /// Name the operation is dispatched under
    pub fn name(&self) -> &str {
        match self {
            Operation::Initialize(_) => "init",
            Operation::CreateContract(_) => "create_contract",
            Operation::Transaction { .. } => "transaction",
            Operation::Read { .. } => "read",
            Operation::ListContracts => "list_contracts",
            Operation::Unknown { name, .. } => name.as_str(),
        }
    }

    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Operation::Initialize(_) | Operation::CreateContract(_) | Operation::Transaction { .. }
        )
    }
}
