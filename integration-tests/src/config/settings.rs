//! Harness settings read from the environment.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use alloy::primitives::{utils::parse_ether, Address, U256};
use alloy::signers::local::PrivateKeySigner;
use indexer_graphql::wait::{DEFAULT_MAX_ATTEMPTS, DEFAULT_POLL_INTERVAL};
use indexer_graphql::WaitPolicy;
use url::Url;

use crate::errors::ConfigError;

/// Default JSON-RPC endpoint of the local chain.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Default GraphQL endpoint of the indexer.
pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:8080/v1/graphql";

/// Default JSON pinning endpoint.
pub const DEFAULT_PINNING_URL: &str = "http://localhost:3000/upload_json_to_ipfs";

/// Mnemonic of the local development chain.
pub const DEFAULT_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// Balance every actor is topped up to before use, in ether.
pub const DEFAULT_FAUCET_AMOUNT_ETH: &str = "0.01";

const CONTRACT_ADDRESS_VARS: [&str; 2] =
    ["INTUITION_CONTRACT_ADDRESS", "VITE_INTUITION_CONTRACT_ADDRESS"];

/// Everything the harness needs to reach the stack.
#[derive(Clone)]
pub struct TestConfig {
    pub rpc_url: Url,
    pub graphql_url: Url,
    pub pinning_url: Url,
    pub contract_address: Address,
    pub mnemonic: String,
    /// Explicit admin key. When unset the admin is mnemonic account 0.
    pub admin_key: Option<PrivateKeySigner>,
    pub faucet_amount: U256,
    pub wait_policy: WaitPolicy,
}

impl fmt::Debug for TestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestConfig")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("graphql_url", &self.graphql_url.as_str())
            .field("pinning_url", &self.pinning_url.as_str())
            .field("contract_address", &self.contract_address)
            .field("admin_key", &self.admin_key.as_ref().map(|key| key.address()))
            .field("faucet_amount", &self.faucet_amount)
            .field("wait_policy", &self.wait_policy)
            .finish_non_exhaustive()
    }
}

impl TestConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `RPC_URL`: chain JSON-RPC endpoint (default: http://127.0.0.1:8545)
    /// - `GRAPHQL_URL`: indexer endpoint (default: http://localhost:8080/v1/graphql)
    /// - `PINNING_URL`: pinning endpoint (default: http://localhost:3000/upload_json_to_ipfs)
    /// - `INTUITION_CONTRACT_ADDRESS` or `VITE_INTUITION_CONTRACT_ADDRESS`: vault contract, required
    /// - `MNEMONIC`: actor mnemonic (default: the local development mnemonic)
    /// - `ADMIN_PRIVATE_KEY`: admin key (default: mnemonic account 0)
    /// - `FAUCET_AMOUNT_ETH`: actor top-up amount (default: 0.01)
    /// - `INDEXER_POLL_INTERVAL_MS`: delay between indexer polls (default: 1000)
    /// - `INDEXER_MAX_ATTEMPTS`: indexer polls before timing out (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Reads the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let contract_address = CONTRACT_ADDRESS_VARS
            .iter()
            .find_map(|var| get(var).map(|value| (*var, value)))
            .ok_or(ConfigError::Missing(CONTRACT_ADDRESS_VARS[0]))
            .and_then(|(var, value)| parse_var::<Address>(var, &value))?;

        let admin_key = get("ADMIN_PRIVATE_KEY")
            .map(|value| {
                PrivateKeySigner::from_str(value.trim())
                    .map_err(|e| ConfigError::invalid("ADMIN_PRIVATE_KEY", e))
            })
            .transpose()?;

        let faucet = get("FAUCET_AMOUNT_ETH").unwrap_or_else(|| DEFAULT_FAUCET_AMOUNT_ETH.to_string());
        let faucet_amount =
            parse_ether(faucet.trim()).map_err(|e| ConfigError::invalid("FAUCET_AMOUNT_ETH", e))?;

        let interval = get("INDEXER_POLL_INTERVAL_MS")
            .map(|value| parse_var::<u64>("INDEXER_POLL_INTERVAL_MS", &value))
            .transpose()?
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_POLL_INTERVAL);
        let max_attempts = get("INDEXER_MAX_ATTEMPTS")
            .map(|value| parse_var::<usize>("INDEXER_MAX_ATTEMPTS", &value))
            .transpose()?
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);

        Ok(Self {
            rpc_url: url_var(&get, "RPC_URL", DEFAULT_RPC_URL)?,
            graphql_url: url_var(&get, "GRAPHQL_URL", DEFAULT_GRAPHQL_URL)?,
            pinning_url: url_var(&get, "PINNING_URL", DEFAULT_PINNING_URL)?,
            contract_address,
            mnemonic: get("MNEMONIC").unwrap_or_else(|| DEFAULT_MNEMONIC.to_string()),
            admin_key,
            faucet_amount,
            wait_policy: WaitPolicy::new(interval, max_attempts),
        })
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::invalid(var, e))
}

fn url_var(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
) -> Result<Url, ConfigError> {
    let value = get(var).unwrap_or_else(|| default.to_string());
    parse_var::<Url>(var, &value)
}
