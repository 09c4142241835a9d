use super::{AttemptError, ChainMode, ProxyEndpoints, TransportError};
use crate::config::TranscriptConfig;
use crate::Result;
use std::env;
use std::time::Duration;
use tracing::warn;

const USER_AGENT: &str = concat!("transcript-lib-rust/", env!("CARGO_PKG_VERSION"));

/// Parses the optional outbound proxy; an unusable value is logged and skipped.
fn outbound_proxy(proxy_url: &str) -> Option<reqwest::Proxy> {
    match reqwest::Proxy::all(proxy_url) {
        Ok(proxy) => Some(proxy),
        Err(e) => {
            warn!(
                proxy_url,
                error = %e,
                "ignoring invalid TRANSCRIPT_PROXY_URL"
            );
            None
        }
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    /// Unpooled client with no shared defaults, used by the last-resort strategy
    bare: reqwest::Client,
    pub(super) proxies: ProxyEndpoints,
    pub(super) direct_timeout: Duration,
    pub(super) proxy_timeout: Duration,
    pub(super) mode: ChainMode,
    pub(super) deadline: Option<Duration>,
}

impl HttpTransport {
    pub fn new(config: &TranscriptConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.direct_timeout)
            .pool_max_idle_per_host(
                env::var("TRANSCRIPT_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(8),
            )
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy) = env::var("TRANSCRIPT_PROXY_URL")
            .ok()
            .and_then(|url| outbound_proxy(&url))
        {
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        let bare = reqwest::Client::builder()
            .no_proxy()
            .http1_only()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            bare,
            proxies: config.proxies.clone(),
            direct_timeout: config.direct_timeout,
            proxy_timeout: config.proxy_timeout,
            mode: config.chain_mode,
            deadline: config.deadline,
        })
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub(super) fn bare_client(&self) -> &reqwest::Client {
        &self.bare
    }

    /// GET `url` and return its body; non-2xx and blank bodies are failures.
    pub(super) async fn get_text(
        client: &reqwest::Client,
        url: &str,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> std::result::Result<String, AttemptError> {
        let mut request = client.get(url).timeout(timeout);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(AttemptError::EmptyBody);
        }
        Ok(body)
    }

    pub(super) fn caption_accept() -> (&'static str, &'static str) {
        ("accept", "text/vtt, text/plain;q=0.9, */*;q=0.8")
    }
}
