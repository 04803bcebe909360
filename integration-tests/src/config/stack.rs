//! Client wiring for a test run.

use std::sync::Arc;

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use indexer_graphql::{GraphqlTransport, IndexerClient, WaitPolicy};
use ipfs::{JsonPinner, MockPinner, PinningClient};
use multivault_client::{EvmMultivault, MockLedger, MultivaultClient};
use tracing::info;
use url::Url;

use super::{TestConfig, DEFAULT_MNEMONIC};
use crate::accounts::{derive_signer, fund_if_below, ADMIN_INDEX};
use crate::actor::Actor;
use crate::errors::HarnessError;

/// Where actors' vault clients point to.
enum Vaults {
    /// In-memory ledger shared by every actor.
    Mock(MockLedger),

    /// A deployed contract reached over JSON-RPC.
    Live {
        rpc_url: Url,
        contract_address: Address,
        /// Wallet provider of the admin, used for faucet transfers.
        admin: DynProvider,
        faucet_amount: U256,
    },
}

/// Clients built once per test run and handed to every [`Actor`].
pub struct Stack {
    vaults: Vaults,
    mnemonic: String,
    indexer: IndexerClient,
    pinner: Arc<dyn JsonPinner>,
    wait_policy: WaitPolicy,
}

impl Stack {
    /// Connects to the services named in `config`.
    ///
    /// Nothing is sent over the network until an actor is created.
    pub fn connect(config: TestConfig) -> Result<Self, HarnessError> {
        let admin_signer = match config.admin_key {
            Some(key) => key,
            None => derive_signer(&config.mnemonic, ADMIN_INDEX)?,
        };

        info!(
            rpc_url = %config.rpc_url,
            graphql_url = %config.graphql_url,
            pinning_url = %config.pinning_url,
            contract_address = %config.contract_address,
            admin = %admin_signer.address(),
            "Connecting to stack"
        );

        let admin = ProviderBuilder::new()
            .wallet(EthereumWallet::from(admin_signer))
            .connect_http(config.rpc_url.clone())
            .erased();

        Ok(Self {
            vaults: Vaults::Live {
                rpc_url: config.rpc_url,
                contract_address: config.contract_address,
                admin,
                faucet_amount: config.faucet_amount,
            },
            mnemonic: config.mnemonic,
            indexer: IndexerClient::http(config.graphql_url)?,
            pinner: Arc::new(PinningClient::new(config.pinning_url)?),
            wait_policy: config.wait_policy,
        })
    }

    /// Stack on an in-memory ledger, a content-addressed pinner and the given
    /// GraphQL transport.
    pub fn mock(ledger: MockLedger, transport: Arc<dyn GraphqlTransport>) -> Self {
        Self {
            vaults: Vaults::Mock(ledger),
            mnemonic: DEFAULT_MNEMONIC.to_string(),
            indexer: IndexerClient::new(transport),
            pinner: Arc::new(MockPinner::new()),
            wait_policy: WaitPolicy::default(),
        }
    }

    /// Replaces the pinner, e.g. to keep a handle on a [`MockPinner`].
    pub fn with_pinner(mut self, pinner: Arc<dyn JsonPinner>) -> Self {
        self.pinner = pinner;
        self
    }

    pub fn with_wait_policy(mut self, wait_policy: WaitPolicy) -> Self {
        self.wait_policy = wait_policy;
        self
    }

    pub fn indexer(&self) -> &IndexerClient {
        &self.indexer
    }

    pub fn pinner(&self) -> &Arc<dyn JsonPinner> {
        &self.pinner
    }

    pub fn wait_policy(&self) -> &WaitPolicy {
        &self.wait_policy
    }

    /// Builds the actor for mnemonic account `index`.
    ///
    /// On a live stack the account is funded from the admin wallet first.
    pub async fn actor(&self, index: u32) -> Result<Actor, HarnessError> {
        let signer = derive_signer(&self.mnemonic, index)?;
        let address = signer.address();

        let client: Arc<dyn MultivaultClient> = match &self.vaults {
            Vaults::Mock(ledger) => Arc::new(ledger.client(address)),
            Vaults::Live {
                rpc_url,
                contract_address,
                admin,
                faucet_amount,
            } => {
                info!(account = %address, index, "Preparing actor");
                fund_if_below(admin, address, *faucet_amount).await?;
                Arc::new(EvmMultivault::connect(
                    rpc_url.clone(),
                    *contract_address,
                    signer,
                ))
            }
        };

        Ok(Actor::new(
            index,
            client,
            self.indexer.clone(),
            self.pinner.clone(),
            self.wait_policy,
        ))
    }
}
