use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::IndexerError;

/// A named GraphQL operation with its variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: Value,
    pub operation_name: String,
}

impl GraphqlRequest {
    pub fn new(operation_name: impl Into<String>, query: impl Into<String>, variables: Value) -> Self {
        Self {
            query: query.into(),
            variables,
            operation_name: operation_name.into(),
        }
    }
}

/// A single entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphqlErrorMessage {
    pub message: String,
}

/// Envelope of a GraphQL response.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorMessage>>,
}

impl GraphqlResponse {
    /// Unwraps `data`, turning GraphQL errors and missing data into
    /// [`IndexerError`]s.
    pub fn into_data(self, operation: &str) -> Result<Value, IndexerError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(IndexerError::Query {
                operation: operation.to_string(),
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }
        match self.data {
            None | Some(Value::Null) => Err(IndexerError::MissingData(operation.to_string())),
            Some(data) => Ok(data),
        }
    }
}
