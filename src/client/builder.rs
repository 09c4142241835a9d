use crate::client::core::TranscriptClient;
use crate::config::TranscriptConfig;
use crate::provider::VimeoApi;
use crate::transport::{ChainMode, HttpTransport};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Starts from [`TranscriptConfig::default`]; use [`TranscriptClientBuilder::from_env`]
/// to start from the process environment instead.
pub struct TranscriptClientBuilder {
    config: TranscriptConfig,
}

impl TranscriptClientBuilder {
    pub fn new() -> Self {
        Self {
            config: TranscriptConfig::default(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            config: TranscriptConfig::from_env(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: TranscriptConfig) -> Self {
        self.config = config;
        self
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = Some(token.into());
        self
    }

    /// Override base URL (primarily for testing with mock servers)
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    pub fn api_timeout(mut self, timeout: Duration) -> Self {
        self.config.api_timeout = timeout;
        self
    }

    pub fn direct_timeout(mut self, timeout: Duration) -> Self {
        self.config.direct_timeout = timeout;
        self
    }

    pub fn proxy_timeout(mut self, timeout: Duration) -> Self {
        self.config.proxy_timeout = timeout;
        self
    }

    /// Bound the whole fetch chain. Unset by default.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.config.deadline = Some(deadline);
        self
    }

    pub fn chain_mode(mut self, mode: ChainMode) -> Self {
        self.config.chain_mode = mode;
        self
    }

    pub fn cors_relay(mut self, prefix: impl Into<String>) -> Self {
        self.config.proxies.cors_relay = prefix.into();
        self
    }

    pub fn wrapping_proxy(mut self, prefix: impl Into<String>) -> Self {
        self.config.proxies.wrapping = prefix.into();
        self
    }

    pub fn secondary_relay(mut self, prefix: impl Into<String>) -> Self {
        self.config.proxies.secondary_relay = prefix.into();
        self
    }

    /// Build the client.
    ///
    /// A missing access token is not a build error; it is reported by each
    /// pipeline run as a configuration failure.
    pub fn build(self) -> Result<TranscriptClient> {
        self.config.validate()?;

        let transport = Arc::new(HttpTransport::new(&self.config)?);
        let api = VimeoApi::new(
            transport.client().clone(),
            self.config.api_base_url.clone(),
            self.config.api_timeout,
        );

        Ok(TranscriptClient {
            config: self.config,
            transport,
            api,
        })
    }
}

impl Default for TranscriptClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
