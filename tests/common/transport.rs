//! Stub transports for exercising the facade without the network.

use std::io::Read;
use std::sync::Mutex;

use async_trait::async_trait;
use nlquery_rs::errors::{ClientError, Result};
use nlquery_rs::transport::Transport;

/// What the stub returns on every call.
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Return this body.
    Body(String),
    /// Fail with a service error carrying this message.
    ServiceFailure(String),
}

/// Transport stub recording every body it is asked to send.
pub struct RecordingTransport {
    reply: StubReply,
    /// JSON bodies sent on the text path.
    pub sent_text: Mutex<Vec<String>>,
    /// (JSON body, audio bytes) pairs sent on the voice path.
    pub sent_voice: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingTransport {
    /// Stub replying with the given body.
    pub fn replying(body: impl Into<String>) -> Self {
        Self::with_reply(StubReply::Body(body.into()))
    }

    /// Stub failing every call with a service error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(StubReply::ServiceFailure(message.into()))
    }

    fn with_reply(reply: StubReply) -> Self {
        Self {
            reply,
            sent_text: Mutex::new(Vec::new()),
            sent_voice: Mutex::new(Vec::new()),
        }
    }

    /// Total number of calls that reached this transport.
    pub fn calls(&self) -> usize {
        self.sent_text.lock().unwrap().len() + self.sent_voice.lock().unwrap().len()
    }

    fn reply(&self) -> Result<String> {
        match &self.reply {
            StubReply::Body(body) => Ok(body.clone()),
            StubReply::ServiceFailure(message) => Err(ClientError::service(message.clone())),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_text(&self, body: &str) -> Result<String> {
        self.sent_text.lock().unwrap().push(body.to_string());
        self.reply()
    }

    async fn send_voice(&self, body: &str, audio: &mut (dyn Read + Send)) -> Result<String> {
        let mut bytes = Vec::new();
        audio
            .read_to_end(&mut bytes)
            .map_err(|e| ClientError::service_with("failed to read stub audio", e))?;
        self.sent_voice
            .lock()
            .unwrap()
            .push((body.to_string(), bytes));
        self.reply()
    }
}
