//! Fetch-once content store
//!
//! Icon markup is fetched at most once per URL for the lifetime of a
//! store. Concurrent lookups for the same URL coalesce onto one
//! in-flight fetch; later lookups are served from the cache. Failures
//! are cached as empty content, so a broken URL costs one request, not
//! one per render.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use quick_xml::events::Event;
use quick_xml::Reader;
use tokio::sync::watch;

use crate::error::Result;
use crate::fetch::{HttpFetcher, SvgFetcher};

#[derive(Default)]
struct Maps {
    /// Completed lookups. Entries are never evicted or overwritten.
    content: HashMap<String, String>,
    /// In-flight lookups. The receiver wakes waiters once the content
    /// entry for the same URL exists.
    pending: HashMap<String, watch::Receiver<()>>,
}

/// The lock is only held for map operations, never across an await, so a
/// poisoned lock still guards consistent maps.
fn lock(maps: &Mutex<Maps>) -> MutexGuard<'_, Maps> {
    maps.lock().unwrap_or_else(PoisonError::into_inner)
}

/// What a lookup found under the lock.
enum Claim {
    /// Nobody is fetching this URL; the caller must.
    Fetch(watch::Sender<()>),
    /// A fetch is in flight; wait for it.
    Wait(watch::Receiver<()>),
}

/// Releases an abandoned claim.
///
/// If the task that claimed a fetch is dropped mid-flight, the pending
/// entry it registered must come out of the map again, otherwise the URL
/// would resolve to nothing forever. Disarmed once the fetch completes.
struct PendingClaim<'a> {
    maps: &'a Mutex<Maps>,
    url: &'a str,
    armed: bool,
}

impl Drop for PendingClaim<'_> {
    fn drop(&mut self) {
        if self.armed {
            lock(self.maps).pending.remove(self.url);
        }
    }
}

/// Shared icon-content cache with single-flight fetches.
pub struct ContentStore<F = HttpFetcher> {
    fetcher: Option<F>,
    maps: Mutex<Maps>,
}

impl ContentStore<HttpFetcher> {
    /// Store backed by the default HTTP fetcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        Ok(Self::with_fetcher(HttpFetcher::new()?))
    }

    /// Store with no transport at all; every lookup resolves to empty
    /// content. Used where fetching is impossible, server-side
    /// rendering being the usual case.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            fetcher: None,
            maps: Mutex::new(Maps::default()),
        }
    }
}

impl<F: SvgFetcher> ContentStore<F> {
    /// Store backed by a custom fetcher.
    #[must_use]
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            fetcher: Some(fetcher),
            maps: Mutex::new(Maps::default()),
        }
    }

    /// Markup for `url`, fetching at most once per store lifetime.
    ///
    /// Failed fetches and payloads that are not SVG documents resolve
    /// to the empty string, and that outcome is cached like any other.
    pub async fn get(&self, url: &str) -> String {
        let claim = {
            let mut maps = lock(&self.maps);
            if let Some(content) = maps.content.get(url) {
                return content.clone();
            }
            if let Some(rx) = maps.pending.get(url) {
                Claim::Wait(rx.clone())
            } else {
                let (tx, rx) = watch::channel(());
                maps.pending.insert(url.to_string(), rx);
                Claim::Fetch(tx)
            }
        };

        match claim {
            Claim::Wait(mut rx) => {
                // The sender fires once, after the content entry is in
                // place; a dropped sender also ends the wait.
                let _ = rx.changed().await;
                self.cached(url).unwrap_or_default()
            }
            Claim::Fetch(tx) => {
                let mut claim = PendingClaim {
                    maps: &self.maps,
                    url,
                    armed: true,
                };
                let content = self.fetch_validated(url).await;
                {
                    let mut maps = lock(&self.maps);
                    maps.content.insert(url.to_string(), content.clone());
                    maps.pending.remove(url);
                }
                claim.armed = false;
                let _ = tx.send(());
                content
            }
        }
    }

    /// Cached markup for `url`, without triggering a fetch.
    #[must_use]
    pub fn cached(&self, url: &str) -> Option<String> {
        lock(&self.maps).content.get(url).cloned()
    }

    async fn fetch_validated(&self, url: &str) -> String {
        let Some(fetcher) = &self.fetcher else {
            return String::new();
        };
        match fetcher.fetch(url).await {
            Ok(body) if is_svg_document(&body) => body,
            Ok(_) => {
                log::debug!("discarding non-svg payload from {url}");
                String::new()
            }
            Err(err) => {
                log::debug!("fetch failed for {url}: {err}");
                String::new()
            }
        }
    }
}

/// Accept a payload only when its document root is `<svg>`.
fn is_svg_document(body: &str) -> bool {
    let mut reader = Reader::from_str(body);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) => return e.name().as_ref() == b"svg",
            Ok(Event::Eof) | Err(_) => return false,
            _ => {}
        }
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    const BODY: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"><path d=\"M0 0\"/></svg>";

    /// Serves one fixed body per URL path, counting calls, with a small
    /// delay so concurrent lookups overlap.
    struct CountingFetcher {
        calls: AtomicUsize,
        fail: bool,
        body: String,
    }

    impl CountingFetcher {
        fn serving(body: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
                body: body.to_string(),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
                body: String::new(),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SvgFetcher for CountingFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            if self.fail {
                return Err(ClientError::Status {
                    url: url.to_string(),
                    status: 404,
                });
            }
            Ok(self.body.clone())
        }
    }

    // ========== CACHING & COALESCING ==========

    #[tokio::test]
    async fn test_repeat_lookups_fetch_once() {
        let store = ContentStore::with_fetcher(CountingFetcher::serving(BODY));

        assert_eq!(store.get("/svg/wifi.svg").await, BODY);
        assert_eq!(store.get("/svg/wifi.svg").await, BODY);

        assert_eq!(store.fetcher.as_ref().unwrap().calls(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_lookups_share_one_fetch() {
        let store = Arc::new(ContentStore::with_fetcher(CountingFetcher::serving(BODY)));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(
                async move { store.get("/svg/wifi.svg").await },
            ));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), BODY);
        }

        assert_eq!(
            store.fetcher.as_ref().unwrap().calls(),
            1,
            "all lookups must coalesce onto one fetch"
        );
    }

    #[tokio::test]
    async fn test_distinct_urls_fetch_independently() {
        let store = ContentStore::with_fetcher(CountingFetcher::serving(BODY));

        store.get("/svg/wifi.svg").await;
        store.get("/svg/battery.svg").await;

        assert_eq!(store.fetcher.as_ref().unwrap().calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_fetch_releases_the_url() {
        let store = ContentStore::with_fetcher(CountingFetcher::serving(BODY));

        // Drop the first lookup while its fetch is still in flight
        let abandoned =
            tokio::time::timeout(Duration::from_millis(1), store.get("/svg/wifi.svg")).await;
        assert!(abandoned.is_err(), "the first lookup must still be in flight");

        assert_eq!(
            store.get("/svg/wifi.svg").await,
            BODY,
            "a later lookup must fetch afresh, not wait on the dead claim"
        );
        assert_eq!(store.fetcher.as_ref().unwrap().calls(), 2);
        assert_eq!(store.cached("/svg/wifi.svg").as_deref(), Some(BODY));
    }

    #[tokio::test]
    async fn test_cached_reports_without_fetching() {
        let store = ContentStore::with_fetcher(CountingFetcher::serving(BODY));

        assert_eq!(store.cached("/svg/wifi.svg"), None);
        store.get("/svg/wifi.svg").await;
        assert_eq!(store.cached("/svg/wifi.svg").as_deref(), Some(BODY));
        assert_eq!(store.fetcher.as_ref().unwrap().calls(), 1);
    }

    // ========== FAILURE & VALIDATION ==========

    #[tokio::test]
    async fn test_failed_fetch_caches_empty_content() {
        let store = ContentStore::with_fetcher(CountingFetcher::failing());

        assert_eq!(store.get("/svg/missing.svg").await, "");
        assert_eq!(store.get("/svg/missing.svg").await, "");

        assert_eq!(
            store.fetcher.as_ref().unwrap().calls(),
            1,
            "a failed URL must not be retried"
        );
        assert_eq!(store.cached("/svg/missing.svg").as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_non_svg_payload_caches_empty_content() {
        let store =
            ContentStore::with_fetcher(CountingFetcher::serving("<html>not found</html>"));

        assert_eq!(store.get("/svg/wifi.svg").await, "");
        assert_eq!(store.cached("/svg/wifi.svg").as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_detached_store_resolves_empty() {
        let store = ContentStore::detached();

        assert_eq!(store.get("/svg/wifi.svg").await, "");
        assert_eq!(store.cached("/svg/wifi.svg").as_deref(), Some(""));
    }

    // ========== PAYLOAD VALIDATION ==========

    #[test]
    fn test_accepts_svg_roots() {
        assert!(is_svg_document(BODY));
        assert!(is_svg_document("<svg/>"));
        assert!(is_svg_document("<!-- note --><svg viewBox=\"0 0 24 24\"></svg>"));
    }

    #[test]
    fn test_rejects_other_roots_and_noise() {
        assert!(!is_svg_document("<html><svg/></html>"));
        assert!(!is_svg_document("404 page not found"));
        assert!(!is_svg_document(""));
    }
}
