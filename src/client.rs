//! Service facade composing configuration, codec and transport.

use std::io::Read;
use std::sync::Arc;

use tracing::{debug, error};
use uuid::Uuid;

use crate::codec;
use crate::config::ClientConfig;
use crate::errors::{ClientError, Result};
use crate::transport::{HttpTransport, Transport};
use crate::types::{Context, QueryRequest, QueryResponse};

/// Sentinel query sent when clearing server-side contexts.
const RESET_QUERY: &str = "empty_query_for_resetting_contexts";

/// Client for a conversational NLP query service.
///
/// One session id is generated per client instance and stamped on every
/// request, so the service can correlate consecutive queries as a single
/// conversation. The client holds no other state across calls.
pub struct NlqClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    session_id: String,
    timezone: String,
}

impl NlqClient {
    /// Client backed by an HTTPS transport built from `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(config.clone())?);
        Ok(Self::with_transport(config, transport))
    }

    /// Client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            session_id: Uuid::new_v4().to_string(),
            timezone: "UTC".to_string(),
        }
    }

    /// Set the IANA timezone id stamped on outgoing requests.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Session id stamped on every request from this client.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Send a text query.
    ///
    /// Language, session id and timezone are stamped onto the request,
    /// overwriting any caller-supplied values. A request without query
    /// text is rejected before anything is sent.
    pub async fn text_query(&self, request: QueryRequest) -> Result<QueryResponse> {
        if request.query.as_deref().is_none_or(str::is_empty) {
            return Err(ClientError::InvalidArgument(
                "query text must be present and non-empty".to_string(),
            ));
        }

        debug!("start text query");
        let request = self.stamp(request);
        let body = codec::encode_request(&request)?;
        debug!(request = %body, "request json");

        let reply = self.transport.send_text(&body).await?;
        self.finish(reply)
    }

    /// Send a voice query; `contexts` ride along with the audio.
    ///
    /// The request is built fresh (voice queries carry no query text) and
    /// stamped like a text query.
    pub async fn voice_query(
        &self,
        audio: impl Read + Send,
        contexts: Vec<Context>,
    ) -> Result<QueryResponse> {
        debug!("start voice query");
        let request = self.stamp(QueryRequest::default().with_contexts(contexts));
        let body = codec::encode_request(&request)?;
        debug!(request = %body, "request json");

        let mut audio = audio;
        let reply = self.transport.send_voice(&body, &mut audio).await?;
        self.finish(reply)
    }

    /// Ask the service to forget all stored contexts.
    ///
    /// Best-effort: returns `true` only when the call succeeds and the
    /// reply carries no error status; every failure is absorbed and
    /// reported as `false`.
    pub async fn reset_contexts(&self) -> bool {
        let request = QueryRequest {
            query: Some(RESET_QUERY.to_string()),
            reset_contexts: true,
            ..QueryRequest::default()
        };

        match self.text_query(request).await {
            Ok(response) => !response.is_error(),
            Err(e) => {
                error!(error = %e, "context reset failed");
                false
            }
        }
    }

    fn stamp(&self, mut request: QueryRequest) -> QueryRequest {
        request.lang = Some(self.config.language.clone());
        request.session_id = Some(self.session_id.clone());
        request.timezone = Some(self.timezone.clone());
        request
    }

    fn finish(&self, body: String) -> Result<QueryResponse> {
        if body.trim().is_empty() {
            return Err(ClientError::service(
                "empty response from the query service; check the configuration",
            ));
        }

        debug!(response = %body, "response json");
        codec::decode_response(&body)
    }
}
