// src/config.rs

//! Runtime settings for network access and URL remapping

use std::time::Duration;

/// Default timeout for each HTTP request (30 seconds)
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with archive downloads and go-get lookups
pub const DEFAULT_USER_AGENT: &str = concat!("dep2bazel/", env!("CARGO_PKG_VERSION"));

/// Settings shared by the HTTP client and the resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Upper bound for a single network call; expiry counts as a failed download
    pub http_timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Rewrite gopkg.in and go.googlesource.com URLs to GitHub before probing
    pub remap: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            remap: true,
        }
    }
}

impl ResolverConfig {
    /// Override the per-request timeout, in seconds
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.http_timeout = Duration::from_secs(secs);
        self
    }

    /// Enable or disable URL remapping
    pub fn with_remap(mut self, remap: bool) -> Self {
        self.remap = remap;
        self
    }
}
