//! HTTP transport for the text and voice paths.

use std::io::Read;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::errors::{ClientError, Result};
use crate::multipart::MultipartForm;
use crate::sound_log::{FileSoundLog, SoundLogSink};

/// Form field carrying the JSON request in the voice path.
const REQUEST_PART: &str = "request";

/// Form field carrying the audio bytes in the voice path.
const VOICE_PART: &str = "voiceData";

/// Logical filename for the uploaded audio.
const VOICE_FILE_NAME: &str = "voice.wav";

/// Wire-level access to the query endpoint.
///
/// A trait so the facade can be exercised against a stub without the
/// HTTP stack.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a JSON body and return the raw response body.
    async fn send_text(&self, body: &str) -> Result<String>;

    /// POST a multipart body carrying the JSON request and the audio
    /// bytes, and return the raw response body.
    async fn send_voice(&self, body: &str, audio: &mut (dyn Read + Send)) -> Result<String>;
}

/// reqwest-backed transport.
///
/// Performs exactly one attempt per call: no retries, no timeout beyond
/// the connection defaults. Dropping an in-flight call aborts the
/// underlying connection.
pub struct HttpTransport {
    http: reqwest::Client,
    config: ClientConfig,
    sound_log: Option<Arc<dyn SoundLogSink>>,
}

impl HttpTransport {
    /// Transport for the given configuration.
    ///
    /// When `write_sound_log` is set, voice payloads are copied to a
    /// [`FileSoundLog`] under the system temp dir.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let sound_log = config
            .write_sound_log
            .then(|| Arc::new(FileSoundLog::in_temp_dir()) as Arc<dyn SoundLogSink>);
        Self::build(config, sound_log)
    }

    /// Transport with a caller-supplied diagnostic sink for voice
    /// payloads.
    pub fn with_sound_log(config: ClientConfig, sink: Arc<dyn SoundLogSink>) -> Result<Self> {
        Self::build(config, Some(sink))
    }

    fn build(config: ClientConfig, sound_log: Option<Arc<dyn SoundLogSink>>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            sound_log,
        })
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("ocp-apim-subscription-key", &self.config.subscription_key)
            .header("Accept", "application/json")
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<String> {
        // The body comes back whatever the status; a non-2xx JSON error
        // payload is data for the caller, not a transport failure.
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ClientError::service_with("failed to read the service response", e)
        })?;
        debug!(status = %status, bytes = body.len(), "query endpoint replied");
        Ok(body)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_text(&self, body: &str) -> Result<String> {
        let response = self
            .authorized(self.http.post(self.config.endpoint.clone()))
            .header("Content-Type", "application/json; charset=utf-8")
            .body(body.to_owned())
            .send()
            .await
            .map_err(|e| {
                ClientError::service_with(
                    "can't reach the query service; check connection settings and the access token",
                    e,
                )
            })?;

        self.read_body(response).await
    }

    async fn send_voice(&self, body: &str, audio: &mut (dyn Read + Send)) -> Result<String> {
        let mut form = MultipartForm::new();
        form.add_text(REQUEST_PART, body);
        let audio_bytes = form
            .add_stream(VOICE_PART, VOICE_FILE_NAME, audio)
            .map_err(|e| ClientError::service_with("failed to read the audio stream", e))?;

        let content_type = form.content_type();
        let payload = form.finish();
        debug!(audio_bytes, payload_bytes = payload.len(), "built multipart voice body");

        if let Some(sink) = &self.sound_log {
            if let Err(e) = sink.record(&payload) {
                warn!(error = %e, "failed to persist sound log copy");
            }
        }

        let response = self
            .authorized(self.http.post(self.config.endpoint.clone()))
            .header("Content-Type", content_type)
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                ClientError::service_with(
                    "can't reach the query service; check connection settings and the access token",
                    e,
                )
            })?;

        self.read_body(response).await
    }
}
