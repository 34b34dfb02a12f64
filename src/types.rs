//! Request and response model for the query protocol.
//!
//! All wire names are camelCase; fields left at their defaults are
//! omitted from the encoded request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

fn is_false(value: &bool) -> bool {
    !*value
}

/// A named bundle of parameters hinting at conversational state.
///
/// Contexts ride along with queries and are cleared server-side by
/// [`crate::NlqClient::reset_contexts`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Context name
    pub name: String,

    /// Parameters attached to this context
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub parameters: serde_json::Map<String, Value>,
}

impl Context {
    /// Context with the given name and no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: serde_json::Map::new(),
        }
    }

    /// Attach a parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

/// A single query to the service.
///
/// `lang`, `session_id` and `timezone` are stamped by the client on every
/// call; caller-supplied values for those fields are overwritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// Query text; absent for voice queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Conversational state hints.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<Context>,

    /// Conversation correlation id, stable for the client's lifetime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Language tag, e.g. "en".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// IANA timezone id, e.g. "Europe/Paris".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Ask the service to forget all stored contexts.
    #[serde(default, skip_serializing_if = "is_false")]
    pub reset_contexts: bool,
}

impl QueryRequest {
    /// Request carrying the given query text.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Attach contexts to this request.
    pub fn with_contexts(mut self, contexts: Vec<Context>) -> Self {
        self.contexts = contexts;
        self
    }
}

/// Status block attached to service replies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStatus {
    /// HTTP-like status code reported by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,

    /// Machine-readable error class, "success" when the call succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    /// Human-readable error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

impl ResponseStatus {
    /// Whether this status marks the reply as a service-side failure.
    pub fn is_error(&self) -> bool {
        match self.code {
            Some(code) => code >= 400,
            None => self
                .error_type
                .as_deref()
                .is_some_and(|error_type| error_type != "success"),
        }
    }
}

/// Reply from the service.
///
/// `result` is service-defined and left opaque; callers inspect it with
/// their own schema. Treated as an immutable value once parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Server-assigned response id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Server timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Opaque result payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Status block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResponseStatus>,
}

impl QueryResponse {
    /// Whether the service reported a failure in its status block.
    pub fn is_error(&self) -> bool {
        self.status.as_ref().is_some_and(ResponseStatus::is_error)
    }
}
