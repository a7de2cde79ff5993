//! Request and response envelopes for the backend's `/graphql` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Body of a GraphQL-over-POST request.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    /// The query document.
    pub query: String,
    /// Query variables; the key is left off the wire when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

impl GraphqlRequest {
    /// Create a request for a query with no variables.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    /// Attach variables to the request.
    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }
}

/// One entry in a GraphQL `errors` list.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlErrorEntry {
    /// Server-reported error message.
    pub message: String,
}

/// A GraphQL response body split into its `data` and `errors` halves.
///
/// GraphQL servers report query errors inside an HTTP 200 body, so the
/// transport layer never sees them; use [`GraphqlResponse::into_data`] to
/// surface them through the normal error taxonomy.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    /// Query result, when the server produced one.
    pub data: Option<T>,
    /// Server-reported errors, when any occurred.
    pub errors: Option<Vec<GraphqlErrorEntry>>,
}

impl<T> GraphqlResponse<T> {
    /// Extract `data`, converting a data-less error envelope into
    /// [`ApiError::Graphql`].
    pub fn into_data(self) -> Result<T, ApiError> {
        match (self.data, self.errors) {
            (Some(data), _) => Ok(data),
            (None, Some(errors)) => Err(ApiError::Graphql {
                message: errors
                    .into_iter()
                    .map(|entry| entry.message)
                    .collect::<Vec<_>>()
                    .join("; "),
            }),
            (None, None) => Err(ApiError::Graphql {
                message: "response carried neither data nor errors".to_string(),
            }),
        }
    }
}
