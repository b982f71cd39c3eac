//! JSON codec for contract records and the index

use super::{Contract, RegistryError};

pub fn encode_contract(contract: &Contract) -> Result<Vec<u8>, RegistryError> {
    serde_json::to_vec(contract).map_err(RegistryError::Encoding)
}

/// Decode a record read from `key`
///
/// Empty input (an absent ledger entry) is a decoding error, not a default.
pub fn decode_contract(key: &str, bytes: &[u8]) -> Result<Contract, RegistryError> {
    serde_json::from_slice(bytes).map_err(|source| RegistryError::Decoding {
        key: key.to_string(),
        source,
    })
}

pub fn encode_index(keys: &[String]) -> Result<Vec<u8>, RegistryError> {
    serde_json::to_vec(keys).map_err(RegistryError::Encoding)
}

pub fn decode_index(key: &str, bytes: &[u8]) -> Result<Vec<String>, RegistryError> {
    serde_json::from_slice(bytes).map_err(|source| RegistryError::Decoding {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_wire_shape() {
        let contract = Contract::new("alice", "bob", "2024Q1", "active");
        let bytes = encode_contract(&contract).unwrap();
        assert_eq!(
            String::from_utf8(bytes.clone()).unwrap(),
            r#"{"customer":"alice","provider":"bob","period":"2024Q1","status":"active"}"#
        );
        assert_eq!(decode_contract("alice", &bytes).unwrap(), contract);
    }

    #[test]
    fn test_index_wire_shape() {
        let keys = vec!["alice".to_string(), "carol".to_string()];
        let bytes = encode_index(&keys).unwrap();
        assert_eq!(bytes, br#"["alice","carol"]"#);
        assert_eq!(decode_index("contracts", &bytes).unwrap(), keys);
    }

    #[test]
    fn test_unusual_strings_survive() {
        let contract = Contract::new("", "\"quoted\"", "line\nbreak", "ünïcødé");
        let bytes = encode_contract(&contract).unwrap();
        assert_eq!(decode_contract("", &bytes).unwrap(), contract);
    }

    #[test]
    fn test_decode_rejects_absent_and_corrupt() {
        assert!(matches!(
            decode_contract("ghost", b""),
            Err(RegistryError::Decoding { key, .. }) if key == "ghost"
        ));
        assert!(decode_contract("alice", b"{\"customer\":\"alice\"}").is_err());
        assert!(decode_index("contracts", b"").is_err());
        assert!(decode_index("contracts", br#"{"not":"a list"}"#).is_err());
    }
}
