use std::fmt;

/// Delivery strategies, in the order the chain tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FetchStrategy {
    Direct,
    Anonymous,
    CorsRelay,
    WrappingProxy,
    SecondaryRelay,
    Native,
}

impl FetchStrategy {
    pub const ORDER: [FetchStrategy; 6] = [
        FetchStrategy::Direct,
        FetchStrategy::Anonymous,
        FetchStrategy::CorsRelay,
        FetchStrategy::WrappingProxy,
        FetchStrategy::SecondaryRelay,
        FetchStrategy::Native,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FetchStrategy::Direct => "direct",
            FetchStrategy::Anonymous => "anonymous",
            FetchStrategy::CorsRelay => "cors_relay",
            FetchStrategy::WrappingProxy => "wrapping_proxy",
            FetchStrategy::SecondaryRelay => "secondary_relay",
            FetchStrategy::Native => "native",
        }
    }

    /// Routed through a third-party proxy (longer timeout).
    pub fn is_proxied(&self) -> bool {
        matches!(
            self,
            FetchStrategy::CorsRelay | FetchStrategy::WrappingProxy | FetchStrategy::SecondaryRelay
        )
    }
}

impl fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// URL prefixes of the proxy services. The target URL is appended to each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEndpoints {
    /// Generic relay; the raw target URL is appended unencoded
    pub cors_relay: String,
    /// Returns `{ "contents": ... }`; target URL is percent-encoded
    pub wrapping: String,
    /// Independent relay; target URL is percent-encoded
    pub secondary_relay: String,
}

impl Default for ProxyEndpoints {
    fn default() -> Self {
        Self {
            cors_relay: "https://cors-anywhere.herokuapp.com/".to_string(),
            wrapping: "https://api.allorigins.win/get?url=".to_string(),
            secondary_relay: "https://corsproxy.io/?".to_string(),
        }
    }
}

impl ProxyEndpoints {
    /// Request URL for `strategy`, or `None` for strategies that hit the target directly.
    pub fn route(&self, strategy: FetchStrategy, target: &str) -> Option<String> {
        match strategy {
            FetchStrategy::CorsRelay => Some(format!("{}{}", self.cors_relay, target)),
            FetchStrategy::WrappingProxy => Some(format!("{}{}", self.wrapping, encode(target))),
            FetchStrategy::SecondaryRelay => {
                Some(format!("{}{}", self.secondary_relay, encode(target)))
            }
            FetchStrategy::Direct | FetchStrategy::Anonymous | FetchStrategy::Native => None,
        }
    }
}

fn encode(target: &str) -> String {
    url::form_urlencoded::byte_serialize(target.as_bytes()).collect()
}
