use rx_integrity::infrastructure::config::{
    ConfigError, LedgerConfig, DEFAULT_CONTRACT_ADDRESS, DEFAULT_MODULE_NAME, DEFAULT_NODE_URL,
};
use std::env;

const VARS: [&str; 4] = [
    "APTOS_NODE_URL",
    "APTOS_CONTRACT_ADDRESS",
    "APTOS_MODULE_NAME",
    "APTOS_NETWORK",
];

// Single test so env mutations never race with each other.
#[test]
fn test_config_from_env() {
    for var in VARS {
        env::remove_var(var);
    }

    let config = LedgerConfig::from_env().expect("defaults are valid");
    assert_eq!(config.node_url, DEFAULT_NODE_URL);
    assert_eq!(config.module.contract_address, DEFAULT_CONTRACT_ADDRESS);
    assert_eq!(config.module.module_name, DEFAULT_MODULE_NAME);
    assert_eq!(config.network, "testnet");

    env::set_var("APTOS_NODE_URL", "http://127.0.0.1:8080/v1");
    env::set_var("APTOS_CONTRACT_ADDRESS", "0xcafe");
    env::set_var("APTOS_NETWORK", "devnet");

    let config = LedgerConfig::from_env().unwrap();
    assert_eq!(config.base_url(), "http://127.0.0.1:8080/v1");
    assert_eq!(
        config.module.function_path("verify_prescription"),
        "0xcafe::aptos_rx_prescription::verify_prescription"
    );
    assert_eq!(config.network, "devnet");

    env::set_var("APTOS_CONTRACT_ADDRESS", "not-an-address");
    assert!(matches!(
        LedgerConfig::from_env(),
        Err(ConfigError::InvalidContractAddress(_))
    ));

    for var in VARS {
        env::remove_var(var);
    }
}
