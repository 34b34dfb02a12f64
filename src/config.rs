//! Client configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{ClientError, Result};

/// Default language tag stamped on requests when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Immutable configuration for a query client.
///
/// Constructed once at setup through [`ConfigBuilder`] and shared by
/// every request the client sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Access token, sent as `Authorization: Bearer`.
    pub api_key: String,

    /// Subscription key, sent alongside the access token.
    pub subscription_key: String,

    /// Language tag stamped on every request, e.g. "en".
    pub language: String,

    /// Query endpoint.
    pub endpoint: Url,

    /// Keep a diagnostic copy of outgoing voice payloads.
    #[serde(default)]
    pub write_sound_log: bool,
}

impl ClientConfig {
    /// Start a configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Configuration from `NLQUERY_*` environment variables.
    ///
    /// Reads `NLQUERY_API_KEY`, `NLQUERY_SUBSCRIPTION_KEY`,
    /// `NLQUERY_ENDPOINT`, `NLQUERY_LANG` and `NLQUERY_SOUND_LOG`.
    pub fn from_env() -> Result<Self> {
        let mut builder = ConfigBuilder::new();

        if let Ok(api_key) = std::env::var("NLQUERY_API_KEY") {
            builder = builder.api_key(api_key);
        }
        if let Ok(subscription_key) = std::env::var("NLQUERY_SUBSCRIPTION_KEY") {
            builder = builder.subscription_key(subscription_key);
        }
        if let Ok(endpoint) = std::env::var("NLQUERY_ENDPOINT") {
            builder = builder.endpoint_str(&endpoint)?;
        }
        if let Ok(language) = std::env::var("NLQUERY_LANG") {
            builder = builder.language(language);
        }
        if let Ok(flag) = std::env::var("NLQUERY_SOUND_LOG") {
            builder = builder.write_sound_log(flag == "1" || flag.eq_ignore_ascii_case("true"));
        }

        builder.build()
    }
}

/// Fluent configuration builder, validating on [`ConfigBuilder::build`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    api_key: Option<String>,
    subscription_key: Option<String>,
    language: Option<String>,
    endpoint: Option<Url>,
    write_sound_log: bool,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Access token for the service.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Subscription key for the service.
    pub fn subscription_key(mut self, subscription_key: impl Into<String>) -> Self {
        self.subscription_key = Some(subscription_key.into());
        self
    }

    /// Language tag, e.g. "en".
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Query endpoint.
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Query endpoint from a string.
    pub fn endpoint_str(self, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ClientError::Config(format!("invalid endpoint URL {endpoint}: {e}")))?;
        Ok(self.endpoint(endpoint))
    }

    /// Keep a diagnostic copy of outgoing voice payloads.
    pub fn write_sound_log(mut self, enabled: bool) -> Self {
        self.write_sound_log = enabled;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<ClientConfig> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ClientError::Config("API key is required".to_string()))?;
        let endpoint = self
            .endpoint
            .ok_or_else(|| ClientError::Config("endpoint URL is required".to_string()))?;

        Ok(ClientConfig {
            api_key,
            subscription_key: self.subscription_key.unwrap_or_default(),
            language: self
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            endpoint,
            write_sound_log: self.write_sound_log,
        })
    }
}
