//! Contract record

use serde::{Deserialize, Serialize};

/// A customer/provider relationship tracked by the registry
///
/// `customer` doubles as the ledger key the record is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub customer: String,
    pub provider: String,
    /// Free-form, e.g. "2024Q1"
    pub period: String,
    /// Free-form, e.g. "active"
    pub status: String,
}

impl Contract {
    pub fn new(
        customer: impl Into<String>,
        provider: impl Into<String>,
        period: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            customer: customer.into(),
            provider: provider.into(),
            period: period.into(),
            status: status.into(),
        }
    }

    /// Build from a `[customer, provider, period, status]` argument slice
    ///
    /// Returns `None` unless exactly four values are given.
    pub fn from_args(args: &[String]) -> Option<Self> {
        match args {
            [customer, provider, period, status] => {
                Some(Self::new(customer, provider, period, status))
            }
            _ => None,
        }
    }

    /// Replace the mutable half of the record
    pub fn transact(&mut self, period: impl Into<String>, status: impl Into<String>) {
        self.period = period.into();
        self.status = status.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args_requires_four_values() {
        let args: Vec<String> = ["alice", "bob", "2024Q1", "active"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            Contract::from_args(&args),
            Some(Contract::new("alice", "bob", "2024Q1", "active"))
        );
        assert_eq!(Contract::from_args(&args[..3]), None);
        assert_eq!(Contract::from_args(&[]), None);
    }

    #[test]
    fn test_transact_keeps_parties() {
        let mut contract = Contract::new("alice", "bob", "2024Q1", "active");
        contract.transact("2024Q2", "closed");
        assert_eq!(contract.customer, "alice");
        assert_eq!(contract.provider, "bob");
        assert_eq!(contract.period, "2024Q2");
        assert_eq!(contract.status, "closed");
    }
}
