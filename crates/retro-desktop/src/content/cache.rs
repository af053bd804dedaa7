//! Time-bounded content cache

use super::Content;

/// Holds the last fetched document for a fixed time.
///
/// Times are caller-supplied milliseconds (`Date.now()` in the browser), so
/// the cache has no clock of its own.
#[derive(Clone, Debug)]
pub struct ContentCache {
    ttl_ms: f64,
    entry: Option<(Content, f64)>,
}

impl ContentCache {
    pub fn new(ttl_ms: f64) -> Self {
        Self { ttl_ms, entry: None }
    }

    /// Cached document if it was stored less than the TTL ago
    pub fn get(&self, now_ms: f64) -> Option<&Content> {
        match &self.entry {
            Some((content, stored)) if now_ms - stored < self.ttl_ms => Some(content),
            _ => None,
        }
    }

    /// Store a freshly fetched document
    pub fn store(&mut self, content: Content, now_ms: f64) {
        self.entry = Some((content, now_ms));
    }

    /// Force the next access to refetch
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

/// Append a `v=<now_ms>` cache-busting query parameter
pub fn cache_busted_url(url: &str, now_ms: f64) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}v={}", url, sep, now_ms.trunc() as u64)
}
