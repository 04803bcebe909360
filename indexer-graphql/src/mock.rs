//! Mock GraphQL transport for testing.
//!
//! Responses are queued per operation name. Each request pops the front of
//! its queue; the last queued response is sticky and keeps being returned
//! once the queue is down to one entry. That makes "empty twice, then
//! indexed" sequences easy to express.
//!
//! # Example
//!
//! ```ignore
//! use indexer_graphql::MockTransport;
//! use serde_json::json;
//!
//! let transport = MockTransport::new();
//! transport.respond("GetTransactionEvents", json!({ "events": [] }));
//! transport.respond("GetTransactionEvents", json!({ "events": [{ "transaction_hash": "0x01" }] }));
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::IndexerError;
use crate::interfaces::GraphqlTransport;
use crate::types::GraphqlRequest;

#[derive(Debug, Clone)]
enum MockResponse {
    Data(Value),
    Error(String),
}

/// Transport answering from queued responses.
pub struct MockTransport {
    responses: Mutex<HashMap<String, VecDeque<MockResponse>>>,
    requests: Mutex<Vec<GraphqlRequest>>,
}

impl MockTransport {
    /// Create a mock with no responses registered.
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue `data` as the next answer to `operation`.
    pub fn respond(&self, operation: &str, data: Value) {
        self.push(operation, MockResponse::Data(data));
    }

    /// Queue a GraphQL error as the next answer to `operation`.
    pub fn respond_error(&self, operation: &str, message: &str) {
        self.push(operation, MockResponse::Error(message.to_string()));
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<GraphqlRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received for `operation`.
    pub fn request_count(&self, operation: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.operation_name == operation)
            .count()
    }

    fn push(&self, operation: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .entry(operation.to_string())
            .or_default()
            .push_back(response);
    }

    fn next_response(&self, operation: &str) -> Option<MockResponse> {
        let mut responses = self.responses.lock().unwrap();
        let queue = responses.get_mut(operation)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphqlTransport for MockTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value, IndexerError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.next_response(&request.operation_name) {
            Some(MockResponse::Data(data)) => Ok(data),
            Some(MockResponse::Error(message)) => {
                Err(IndexerError::query(&request.operation_name, message))
            }
            None => Err(IndexerError::query(
                &request.operation_name,
                "no mock response registered",
            )),
        }
    }
}
