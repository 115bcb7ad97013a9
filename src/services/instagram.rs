use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

/// Asset served by the surrounding site when no real thumbnail is reachable.
pub const FALLBACK_THUMBNAIL: &str = "/video-placeholder.svg";

static POST_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"instagram\.com/(p|reel)/([A-Za-z0-9_-]+)").expect("valid post URL regex")
});

/// Pull the canonical media identifier out of an Instagram post or reel URL.
pub fn parse_post_id(url: &str) -> Option<String> {
    POST_URL_RE
        .captures(url)
        .map(|caps| caps[2].to_string())
}

/// Derived large-size media URL for a post id.
pub fn media_url(post_id: &str) -> String {
    format!("https://instagram.com/p/{}/media/?size=l", post_id)
}

/// Capability seam for the best-effort thumbnail check, injected through app
/// state so tests can stub network behavior instead of hitting Instagram.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// True if a HEAD request to `url` answers with a 2xx status.
    async fn is_reachable(&self, url: &str) -> bool;
}

/// Production probe: one HEAD request, bounded by the configured timeout,
/// no retries. Any transport error or non-2xx status counts as unreachable.
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }
}

#[async_trait]
impl ReachabilityProbe for HttpProbe {
    async fn is_reachable(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(url = url, error = %e, "Thumbnail probe failed");
                false
            }
        }
    }
}
