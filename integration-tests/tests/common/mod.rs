#![allow(dead_code)]

use std::sync::Arc;

use dotenv::dotenv;
use indexer_graphql::queries::documents::GET_TRANSACTION_EVENTS;
use indexer_graphql::MockTransport;
use integration_tests::{init_test_tracing, Stack, TestConfig};
use multivault_client::MockLedger;
use serde_json::json;

/// Stack pointing at the services configured in the environment.
pub fn live_stack() -> Stack {
    dotenv().ok();
    init_test_tracing();
    let config = TestConfig::from_env().expect("stack configuration");
    Stack::connect(config).expect("stack connection")
}

/// In-memory stack with handles on its ledger and GraphQL transport.
pub struct MockStack {
    pub stack: Stack,
    pub ledger: MockLedger,
    pub transport: Arc<MockTransport>,
}

pub fn mock_stack() -> MockStack {
    init_test_tracing();
    let ledger = MockLedger::new();
    let transport = Arc::new(MockTransport::new());
    let stack = Stack::mock(ledger.clone(), transport.clone());
    MockStack {
        stack,
        ledger,
        transport,
    }
}

/// Makes every transaction look indexed on the first poll.
pub fn index_everything(transport: &MockTransport) {
    transport.respond(
        GET_TRANSACTION_EVENTS,
        json!({ "events": [{ "transaction_hash": "0x01" }] }),
    );
}
