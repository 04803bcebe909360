use std::sync::Arc;

use alloy::primitives::{Address, TxHash};
use multivault_shared::types::VaultId;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::json;
use tracing::info;
use url::Url;

use super::documents::*;
use crate::errors::IndexerError;
use crate::http::HttpTransport;
use crate::interfaces::GraphqlTransport;
use crate::types::{
    AtomWithClaims, FollowingAccount, GraphqlRequest, PinPersonInput, PinThingInput,
    TransactionEvent, VaultPosition,
};
use crate::wait::{wait_for_indexed, WaitPolicy};

#[derive(Deserialize)]
struct TransactionEventsData {
    events: Vec<TransactionEvent>,
}

#[derive(Deserialize)]
struct FollowingData {
    following: Vec<FollowingAccount>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VaultPositionsData {
    vault_positions: Vec<VaultPosition>,
}

#[derive(Deserialize)]
struct PinnedUri {
    uri: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PinThingData {
    pin_thing: PinnedUri,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PinPersonData {
    pin_person: PinnedUri,
}

/// Addresses are stored lowercased by the indexer.
fn indexed_address(address: Address) -> String {
    address.to_string().to_lowercase()
}

/// Typed client for the indexer's GraphQL API.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct IndexerClient {
    transport: Arc<dyn GraphqlTransport>,
}

impl IndexerClient {
    pub fn new(transport: Arc<dyn GraphqlTransport>) -> Self {
        Self { transport }
    }

    /// Client posting to the endpoint at `url`.
    pub fn http(url: Url) -> Result<Self, IndexerError> {
        Ok(Self::new(Arc::new(HttpTransport::new(url)?)))
    }

    /// Runs `request` and decodes its data as `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: GraphqlRequest,
    ) -> Result<T, IndexerError> {
        let data = self.transport.execute(&request).await?;
        serde_json::from_value(data).map_err(|e| IndexerError::decode(request.operation_name, e))
    }

    /// Events the indexer recorded for the transaction `hash`.
    pub async fn transaction_events(
        &self,
        hash: TxHash,
    ) -> Result<Vec<TransactionEvent>, IndexerError> {
        let request = GraphqlRequest::new(
            GET_TRANSACTION_EVENTS,
            GET_TRANSACTION_EVENTS_QUERY,
            json!({ "hash": hash.to_string() }),
        );
        let data: TransactionEventsData = self.execute(request).await?;
        Ok(data.events)
    }

    /// Accounts followed by `address`.
    pub async fn following(&self, address: Address) -> Result<Vec<FollowingAccount>, IndexerError> {
        let request = GraphqlRequest::new(
            FOLLOWING,
            FOLLOWING_QUERY,
            json!({ "address": indexed_address(address) }),
        );
        let data: FollowingData = self.execute(request).await?;
        Ok(data.following)
    }

    /// An atom with the claims `address` and the accounts it follows made
    /// about it.
    pub async fn atom_with_claims(
        &self,
        atom_id: VaultId,
        address: Address,
    ) -> Result<AtomWithClaims, IndexerError> {
        let request = GraphqlRequest::new(
            ATOM_WITH_CLAIMS,
            ATOM_WITH_CLAIMS_QUERY,
            json!({ "atomId": atom_id.to_string(), "address": indexed_address(address) }),
        );
        self.execute(request).await
    }

    /// Positions held in the vault `vault_id`.
    pub async fn vault_positions(
        &self,
        vault_id: VaultId,
    ) -> Result<Vec<VaultPosition>, IndexerError> {
        let request = GraphqlRequest::new(
            VAULT_POSITIONS,
            VAULT_POSITIONS_QUERY,
            json!({ "vaultId": vault_id.to_string() }),
        );
        let data: VaultPositionsData = self.execute(request).await?;
        Ok(data.vault_positions)
    }

    /// Pins a schema.org Thing through the API and returns its `ipfs://` URI.
    pub async fn pin_thing(&self, thing: &PinThingInput) -> Result<String, IndexerError> {
        let request = GraphqlRequest::new(PIN_THING, PIN_THING_MUTATION, json!({ "thing": thing }));
        let data: PinThingData = self.execute(request).await?;
        info!(uri = %data.pin_thing.uri, "Pinned thing");
        Ok(data.pin_thing.uri)
    }

    /// Pins a schema.org Person through the API and returns its `ipfs://` URI.
    pub async fn pin_person(&self, person: &PinPersonInput) -> Result<String, IndexerError> {
        let request =
            GraphqlRequest::new(PIN_PERSON, PIN_PERSON_MUTATION, json!({ "person": person }));
        let data: PinPersonData = self.execute(request).await?;
        info!(uri = %data.pin_person.uri, "Pinned person");
        Ok(data.pin_person.uri)
    }

    /// Waits until the indexer has recorded an event for `hash`.
    ///
    /// See [`wait_for_indexed`].
    pub async fn wait_for_indexed(
        &self,
        hash: Option<TxHash>,
        policy: &WaitPolicy,
    ) -> Result<(), IndexerError> {
        wait_for_indexed(self, hash, policy).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTransport;
    use alloy::primitives::{address, U256};

    const ALICE: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

    #[tokio::test]
    async fn test_following_sends_lowercased_address() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(
            FOLLOWING,
            json!({ "following": [{ "id": "0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc", "atom_id": "3" }] }),
        );
        let client = IndexerClient::new(transport.clone());

        let following = client.following(ALICE).await.unwrap();
        assert_eq!(following.len(), 1);
        assert_eq!(following[0].atom_id, Some(U256::from(3)));

        let request = &transport.requests()[0];
        assert_eq!(
            request.variables["address"],
            "0x70997970c51812dc3a010c7d01b50e0d17dc79c8"
        );
    }

    #[tokio::test]
    async fn test_vault_positions() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(
            VAULT_POSITIONS,
            json!({ "vaultPositions": [{ "vaultId": "9", "shares": "1000" }] }),
        );
        let client = IndexerClient::new(transport.clone());

        let positions = client.vault_positions(U256::from(9)).await.unwrap();
        assert_eq!(positions[0].shares, U256::from(1000));
        assert_eq!(transport.requests()[0].variables["vaultId"], "9");
    }

    #[tokio::test]
    async fn test_pin_thing_returns_uri() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(PIN_THING, json!({ "pinThing": { "uri": "ipfs://QmThing" } }));
        let client = IndexerClient::new(transport.clone());

        let uri = client
            .pin_thing(&PinThingInput {
                name: "Denver Events".to_string(),
                description: "Denver Events".to_string(),
                image: String::new(),
                url: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(uri, "ipfs://QmThing");
        assert_eq!(transport.requests()[0].variables["thing"]["name"], "Denver Events");
    }

    #[tokio::test]
    async fn test_decode_error_names_the_operation() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(FOLLOWING, json!({ "following": "nope" }));
        let client = IndexerClient::new(transport);

        let err = client.following(ALICE).await.unwrap_err();
        assert!(matches!(err, IndexerError::Decode { ref operation, .. } if operation == FOLLOWING));
    }
}
