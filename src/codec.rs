//! JSON encoding and decoding between the model types and wire bodies.

use crate::errors::{ClientError, Result};
use crate::types::{QueryRequest, QueryResponse};

/// Encode a request into its JSON wire form.
pub fn encode_request(request: &QueryRequest) -> Result<String> {
    Ok(serde_json::to_string(request)?)
}

/// Decode a raw response body into a [`QueryResponse`].
///
/// An empty or malformed body never yields a partial response.
pub fn decode_response(body: &str) -> Result<QueryResponse> {
    if body.trim().is_empty() {
        return Err(ClientError::decode("empty response body"));
    }

    serde_json::from_str(body)
        .map_err(|e| ClientError::decode_with("response body is not valid JSON for the expected shape", e))
}
