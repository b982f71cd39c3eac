//! Encode/decode laws for contract records and the index

use ledger_contracts::domain::contract::codec::{
    decode_contract, decode_index, encode_contract, encode_index,
};
use ledger_contracts::{Contract, INDEX_KEY};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn contract_strategy() -> impl Strategy<Value = Contract> {
    (any::<String>(), any::<String>(), any::<String>(), any::<String>()).prop_map(
        |(customer, provider, period, status)| Contract::new(customer, provider, period, status),
    )
}

proptest! {
    #![proptest_config(Config::with_cases(256))]
    #[test]
    fn contract_survives_encode_decode(contract in contract_strategy()) {
        let bytes = encode_contract(&contract).expect("encode contract");
        let decoded = decode_contract(&contract.customer, &bytes).expect("decode contract");
        prop_assert_eq!(decoded, contract);
    }

    #[test]
    fn index_survives_encode_decode(keys in prop::collection::vec(any::<String>(), 0..32)) {
        let bytes = encode_index(&keys).expect("encode index");
        let decoded = decode_index(INDEX_KEY, &bytes).expect("decode index");
        prop_assert_eq!(decoded, keys);
    }

    #[test]
    fn contract_encoding_is_deterministic(contract in contract_strategy()) {
        let first = encode_contract(&contract).expect("encode contract");
        let second = encode_contract(&contract.clone()).expect("encode contract");
        prop_assert_eq!(first, second);
    }
}
