//! # nlquery-rs
//!
//! Rust client SDK for conversational NLP services: forward text or voice
//! queries over HTTPS and get typed JSON responses back.
//!
//! The surface is deliberately small. A [`NlqClient`] stamps a stable
//! session id, language and timezone onto each request, encodes it as
//! JSON, POSTs it (or POSTs a multipart form with an audio part for voice
//! queries) and decodes the reply. Each call is a single HTTP attempt
//! with no retries or internal concurrency; cancellation is dropping the
//! future.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nlquery_rs::{ClientConfig, NlqClient, QueryRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::builder()
//!         .api_key("your-access-token")
//!         .subscription_key("your-subscription-key")
//!         .endpoint_str("https://api.example.com/v1/query")?
//!         .build()?;
//!
//!     let client = NlqClient::new(config)?;
//!
//!     let response = client.text_query(QueryRequest::new("what's the weather?")).await?;
//!     println!("result: {:?}", response.result);
//!
//!     // Voice flow: any Read over the audio bytes.
//!     let audio = std::fs::File::open("query.wav")?;
//!     let response = client.voice_query(audio, Vec::new()).await?;
//!     println!("result: {:?}", response.result);
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod client;
pub mod codec;
pub mod config;
pub mod errors;
pub mod multipart;
pub mod sound_log;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::NlqClient;
pub use config::{ClientConfig, ConfigBuilder};
pub use errors::{ClientError, Result};
pub use multipart::MultipartForm;
pub use sound_log::{FileSoundLog, SoundLogSink};
pub use transport::{HttpTransport, Transport};
pub use types::{Context, QueryRequest, QueryResponse, ResponseStatus};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the SDK with default logging
pub fn init() {
    tracing_subscriber::fmt::init();
}
