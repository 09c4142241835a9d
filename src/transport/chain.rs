//! Ordered fallback chain for caption downloads.

use super::{AttemptError, AttemptFailure, FetchStrategy, HttpTransport};
use crate::parser::unwrap_contents_envelope;
use crate::{Error, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use std::time::Instant;
use tracing::{debug, warn};

/// How strategies are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainMode {
    /// One strategy at a time, in order; never more than one request in flight.
    #[default]
    Sequential,
    /// `Direct` and `Anonymous` in order, then the remaining strategies raced,
    /// first success wins and the losers are dropped.
    RaceProxies,
}

impl ChainMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Some(ChainMode::Sequential),
            "race" | "race_proxies" | "race-proxies" => Some(ChainMode::RaceProxies),
            _ => None,
        }
    }
}

impl HttpTransport {
    /// Downloads raw caption text, trying every delivery strategy before giving up.
    ///
    /// Individual failures are logged and swallowed; only exhaustion of the whole
    /// chain is returned, as a single [`Error::FetchExhausted`].
    pub async fn fetch_transcript_content(&self, url: &str) -> Result<String> {
        let Some(deadline) = self.deadline else {
            return self.run_chain(url).await;
        };

        let started = Instant::now();
        match tokio::time::timeout(deadline, self.run_chain(url)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout {
                stage: "fetching caption content".to_string(),
                elapsed_ms: started.elapsed().as_millis() as u64,
            }),
        }
    }

    async fn run_chain(&self, url: &str) -> Result<String> {
        let mut failures = Vec::with_capacity(FetchStrategy::ORDER.len());

        let order = FetchStrategy::ORDER;
        let (sequential, raced) = match self.mode {
            ChainMode::Sequential => order.split_at(order.len()),
            ChainMode::RaceProxies => order.split_at(2),
        };

        for &strategy in sequential {
            match self.attempt(strategy, url).await {
                Ok(body) => return Ok(body),
                Err(error) => failures.push(AttemptFailure { strategy, error }),
            }
        }

        if !raced.is_empty() {
            let mut racing: FuturesUnordered<_> = raced
                .iter()
                .map(|&strategy| async move { (strategy, self.attempt(strategy, url).await) })
                .collect();
            while let Some((strategy, result)) = racing.next().await {
                match result {
                    Ok(body) => return Ok(body),
                    Err(error) => failures.push(AttemptFailure { strategy, error }),
                }
            }
            failures.sort_by_key(|f| f.strategy);
        }

        warn!(
            url,
            attempts = failures.len(),
            "all caption fetch strategies exhausted"
        );
        Err(Error::FetchExhausted {
            url: url.to_string(),
            attempts: failures,
        })
    }

    async fn attempt(
        &self,
        strategy: FetchStrategy,
        url: &str,
    ) -> std::result::Result<String, AttemptError> {
        debug!(strategy = strategy.name(), "attempting caption fetch");
        let started = Instant::now();
        let timeout = if strategy.is_proxied() {
            self.proxy_timeout
        } else {
            self.direct_timeout
        };

        let result = match strategy {
            FetchStrategy::Direct => {
                Self::get_text(self.client(), url, &[Self::caption_accept()], timeout)
                    .await
            }
            FetchStrategy::Anonymous => {
                Self::get_text(self.client(), url, &[], timeout).await
            }
            FetchStrategy::CorsRelay => {
                let routed = self.route(strategy, url);
                Self::get_text(
                    self.client(),
                    &routed,
                    &[("x-requested-with", "XMLHttpRequest")],
                    timeout,
                )
                .await
            }
            FetchStrategy::WrappingProxy => {
                let routed = self.route(strategy, url);
                Self::get_text(
                    self.client(),
                    &routed,
                    &[("accept", "application/json")],
                    timeout,
                )
                .await
                .and_then(|body| {
                    unwrap_contents_envelope(&body)
                        .filter(|contents| !contents.trim().is_empty())
                        .ok_or(AttemptError::Envelope)
                })
            }
            FetchStrategy::SecondaryRelay => {
                let routed = self.route(strategy, url);
                Self::get_text(self.client(), &routed, &[], timeout).await
            }
            FetchStrategy::Native => {
                Self::get_text(self.bare_client(), url, &[], timeout).await
            }
        };

        match &result {
            Ok(body) => debug!(
                strategy = strategy.name(),
                bytes = body.len(),
                duration_ms = started.elapsed().as_millis() as u64,
                "caption fetch succeeded"
            ),
            Err(error) => warn!(
                strategy = strategy.name(),
                error = %error,
                duration_ms = started.elapsed().as_millis() as u64,
                "caption fetch strategy failed"
            ),
        }
        result
    }

    fn route(&self, strategy: FetchStrategy, url: &str) -> String {
        self.proxies
            .route(strategy, url)
            .unwrap_or_else(|| url.to_string())
    }
}
