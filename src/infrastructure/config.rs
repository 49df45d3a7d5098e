//! Ledger configuration loaded from environment variables with defaults.

use std::env;
use thiserror::Error;

pub const DEFAULT_NODE_URL: &str = "https://fullnode.testnet.aptoslabs.com/v1";
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x1";
pub const DEFAULT_MODULE_NAME: &str = "aptos_rx_prescription";
pub const DEFAULT_NETWORK: &str = "testnet";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Node URL must start with http:// or https://, got {0:?}")]
    InvalidNodeUrl(String),

    #[error("Contract address must be 0x-prefixed hex, got {0:?}")]
    InvalidContractAddress(String),

    #[error("Module name cannot be empty")]
    EmptyModuleName,
}

/// Where the prescription module lives on-chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConfig {
    pub contract_address: String,
    pub module_name: String,
}

impl ModuleConfig {
    pub fn new(contract_address: &str, module_name: &str) -> Self {
        Self {
            contract_address: contract_address.to_string(),
            module_name: module_name.to_string(),
        }
    }

    /// Fully qualified `<address>::<module>::<function>` path.
    pub fn function_path(&self, function: &str) -> String {
        format!("{}::{}::{}", self.contract_address, self.module_name, function)
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONTRACT_ADDRESS, DEFAULT_MODULE_NAME)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Fullnode REST base URL, including the `/v1` segment.
    pub node_url: String,
    pub module: ModuleConfig,
    /// Network name used for explorer links.
    pub network: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.to_string(),
            module: ModuleConfig::default(),
            network: DEFAULT_NETWORK.to_string(),
        }
    }
}

impl LedgerConfig {
    /// Reads `APTOS_NODE_URL`, `APTOS_CONTRACT_ADDRESS`, `APTOS_MODULE_NAME`
    /// and `APTOS_NETWORK`, falling back to the testnet defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            node_url: env::var("APTOS_NODE_URL").unwrap_or_else(|_| DEFAULT_NODE_URL.to_string()),
            module: ModuleConfig {
                contract_address: env::var("APTOS_CONTRACT_ADDRESS")
                    .unwrap_or_else(|_| DEFAULT_CONTRACT_ADDRESS.to_string()),
                module_name: env::var("APTOS_MODULE_NAME")
                    .unwrap_or_else(|_| DEFAULT_MODULE_NAME.to_string()),
            },
            network: env::var("APTOS_NETWORK").unwrap_or_else(|_| DEFAULT_NETWORK.to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.node_url.starts_with("http://") || self.node_url.starts_with("https://")) {
            return Err(ConfigError::InvalidNodeUrl(self.node_url.clone()));
        }

        let address = &self.module.contract_address;
        let valid_address = address
            .strip_prefix("0x")
            .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_hexdigit()));
        if !valid_address {
            return Err(ConfigError::InvalidContractAddress(address.clone()));
        }

        if self.module.module_name.trim().is_empty() {
            return Err(ConfigError::EmptyModuleName);
        }

        Ok(())
    }

    /// Node URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.node_url.trim_end_matches('/')
    }
}
