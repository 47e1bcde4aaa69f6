//! Background image loader
//!
//! Event artwork is fetched on background threads, one per image, and the
//! results are collected on each UI tick. Fetches are deferred until the
//! owning row is on screen unless requested with priority. Results are cached
//! by optimized URL so no image is fetched twice.

use crate::error::ImageError;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, LazyLock};
use std::thread;
use std::time::Duration;

/// Matches URLs served by the image CDN that accepts resize parameters
static CDN_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://([a-z0-9-]+\.)*unsplash\.com(/|\?|$)").unwrap()
});

/// Query parameters forced on CDN URLs when WebP is available
const WEBP_PARAMS: [(&str, &str); 5] = [
    ("fm", "webp"),
    ("q", "85"),
    ("w", "800"),
    ("h", "600"),
    ("fit", "crop"),
];

/// Number of catalog images fetched eagerly at startup
pub const PRELOAD_COUNT: usize = 3;

/// Text shown where an image could not be loaded
pub const PLACEHOLDER_TEXT: &str = "Imagen no disponible";

// ─────────────────────────────────────────────────────────────────────────────
// Platform seams
// ─────────────────────────────────────────────────────────────────────────────

/// Reports which image encodings the display side can handle
pub trait ImageCapabilityProbe {
    fn supports_webp(&self) -> bool;
}

/// Fixed answer, taken from configuration
#[derive(Debug, Clone, Copy)]
pub struct StaticProbe {
    pub webp: bool,
}

impl ImageCapabilityProbe for StaticProbe {
    fn supports_webp(&self) -> bool {
        self.webp
    }
}

/// Reports whether the element showing an image is on screen
pub trait VisibilityObserver {
    fn is_visible(&self, key: &str) -> bool;
}

/// Visibility from the set of image URLs the current frame shows
#[derive(Debug, Clone, Default)]
pub struct VisibleSet {
    keys: HashSet<String>,
}

impl VisibleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into());
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl VisibilityObserver for VisibleSet {
    fn is_visible(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

/// Downloads raw image bytes. Runs on a background thread.
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError>;
}

/// HTTP request timeout for a single image
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches over HTTP with a blocking client, called from the fetch thread
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ImageError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ImageError::Fetch(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ImageError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Fetch(status.to_string()));
        }

        let bytes = response
            .bytes()
            .map_err(|e| ImageError::Fetch(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Stand-in for a loader that never fetches
struct OfflineFetcher;

impl ImageFetcher for OfflineFetcher {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, ImageError> {
        Err(ImageError::Fetch("image fetching disabled".to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// URL optimization
// ─────────────────────────────────────────────────────────────────────────────

/// Rewrite CDN URLs to request a cropped WebP rendition
///
/// Existing parameters keep their position; forced ones replace values in
/// place or are appended. Other URLs pass through untouched.
pub fn optimize_url(url: &str, probe: &dyn ImageCapabilityProbe) -> String {
    if !probe.supports_webp() || !CDN_URL_REGEX.is_match(url) {
        return url.to_string();
    }

    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (url, None),
    };
    let (base, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));

    let mut params: Vec<(String, String)> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect();

    for (key, value) in WEBP_PARAMS {
        match params.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value.to_string(),
            None => params.push((key.to_string(), value.to_string())),
        }
    }
    // Repeated keys collapse to the first occurrence, like URLSearchParams::set
    let mut seen = HashSet::new();
    params.retain(|(k, _)| !WEBP_PARAMS.iter().any(|(p, _)| p == k) || seen.insert(k.clone()));

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    match fragment {
        Some(frag) => format!("{}?{}#{}", base, query, frag),
        None => format!("{}?{}", base, query),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loader
// ─────────────────────────────────────────────────────────────────────────────

/// What was learned about a fetched image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub mime_type: String,
    pub extension: String,
    pub byte_len: usize,
}

impl ImageInfo {
    pub fn summary(&self) -> String {
        format!("{} · {} KB", self.extension.to_uppercase(), self.byte_len.div_ceil(1024))
    }
}

/// Identify image bytes by their magic number
pub fn sniff(bytes: &[u8]) -> Result<ImageInfo, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }

    match infer::get(bytes) {
        Some(kind) if kind.matcher_type() == infer::MatcherType::Image => Ok(ImageInfo {
            mime_type: kind.mime_type().to_string(),
            extension: kind.extension().to_string(),
            byte_len: bytes.len(),
        }),
        _ => Err(ImageError::NotAnImage),
    }
}

/// Cache entry for one optimized URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    /// Waiting to become visible
    Deferred,
    /// Fetch in flight
    Pending,
    Loaded(ImageInfo),
    Failed(ImageError),
}

impl ImageState {
    pub fn is_settled(&self) -> bool {
        matches!(self, ImageState::Loaded(_) | ImageState::Failed(_))
    }
}

/// Result sent back from a fetch thread
struct ImageMessage {
    url: String,
    result: Result<ImageInfo, ImageError>,
}

/// Loader service owned by the app
pub struct ImageLoader {
    fetcher: Arc<dyn ImageFetcher>,
    probe: Box<dyn ImageCapabilityProbe>,
    cache: HashMap<String, ImageState>,
    sender: Sender<ImageMessage>,
    receiver: Receiver<ImageMessage>,
    enabled: bool,
}

impl ImageLoader {
    pub fn new(fetcher: Arc<dyn ImageFetcher>, probe: Box<dyn ImageCapabilityProbe>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            fetcher,
            probe,
            cache: HashMap::new(),
            sender,
            receiver,
            enabled: true,
        }
    }

    /// Loader that never fetches; every request stays deferred
    pub fn disabled() -> Self {
        let mut loader = Self::new(Arc::new(OfflineFetcher), Box::new(StaticProbe { webp: false }));
        loader.enabled = false;
        loader
    }

    pub fn optimized(&self, url: &str) -> String {
        optimize_url(url, self.probe.as_ref())
    }

    /// Current state for an image, by its original URL
    pub fn state(&self, url: &str) -> Option<&ImageState> {
        self.cache.get(&self.optimized(url))
    }

    /// Ask for an image. The fetch starts now when `priority` is set or the
    /// observer reports `url` visible; otherwise the entry stays deferred
    /// until a later request finds it visible.
    pub fn request(
        &mut self,
        url: &str,
        priority: bool,
        observer: &dyn VisibilityObserver,
    ) -> ImageState {
        let optimized = self.optimized(url);

        if let Some(state) = self.cache.get(&optimized) {
            if *state != ImageState::Deferred {
                return state.clone();
            }
        }

        let state = if self.enabled && (priority || observer.is_visible(url)) {
            self.spawn_fetch(optimized.clone());
            ImageState::Pending
        } else {
            ImageState::Deferred
        };

        self.cache.insert(optimized, state.clone());
        state
    }

    /// Fetch the first few catalog images right away
    pub fn preload<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) {
        let observer = VisibleSet::new();
        for url in urls.into_iter().take(PRELOAD_COUNT) {
            self.request(url, true, &observer);
        }
    }

    fn spawn_fetch(&self, url: String) {
        tracing::debug!("Fetching image {}", url);
        let sender = self.sender.clone();
        let fetcher = Arc::clone(&self.fetcher);

        thread::spawn(move || {
            let result = fetcher.fetch(&url).and_then(|bytes| sniff(&bytes));
            // The loader may be gone by now; late results are dropped
            let _ = sender.send(ImageMessage { url, result });
        });
    }

    /// Apply finished fetches, returns true if any entry changed
    pub fn poll(&mut self) -> bool {
        let mut had_updates = false;

        loop {
            match self.receiver.try_recv() {
                Ok(ImageMessage { url, result }) => {
                    had_updates = true;
                    let state = match result {
                        Ok(info) => {
                            tracing::debug!("Loaded image {} ({})", url, info.mime_type);
                            ImageState::Loaded(info)
                        }
                        Err(e) => {
                            tracing::debug!("Image {} failed: {}", url, e);
                            ImageState::Failed(e)
                        }
                    };
                    self.cache.insert(url, state);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        had_updates
    }

    /// Number of fetches still in flight
    pub fn pending_count(&self) -> usize {
        self.cache
            .values()
            .filter(|s| **s == ImageState::Pending)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    struct FakeFetcher {
        calls: AtomicUsize,
    }

    impl ImageFetcher for FakeFetcher {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if url.contains("broken") {
                Err(ImageError::Fetch("404".to_string()))
            } else if url.contains("text") {
                Ok(b"<html></html>".to_vec())
            } else {
                Ok(PNG_BYTES.to_vec())
            }
        }
    }

    fn loader(webp: bool) -> (ImageLoader, Arc<FakeFetcher>) {
        let fetcher = Arc::new(FakeFetcher {
            calls: AtomicUsize::new(0),
        });
        let loader = ImageLoader::new(fetcher.clone(), Box::new(StaticProbe { webp }));
        (loader, fetcher)
    }

    fn wait_settled(loader: &mut ImageLoader, url: &str) -> ImageState {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            loader.poll();
            if let Some(state) = loader.state(url) {
                if state.is_settled() {
                    return state.clone();
                }
            }
            assert!(Instant::now() < deadline, "image never settled");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_optimize_url_rewrites_cdn_params() {
        let probe = StaticProbe { webp: true };
        let url = "https://images.unsplash.com/photo-1?auto=format&fit=crop&w=1470&q=80";
        assert_eq!(
            optimize_url(url, &probe),
            "https://images.unsplash.com/photo-1?auto=format&fit=crop&w=800&q=85&fm=webp&h=600"
        );
    }

    #[test]
    fn test_optimize_url_leaves_other_urls() {
        let probe = StaticProbe { webp: true };
        let url = "https://example.com/unsplash.com/photo.jpg?w=10";
        assert_eq!(optimize_url(url, &probe), url);

        let no_webp = StaticProbe { webp: false };
        let cdn = "https://images.unsplash.com/photo-1?w=1470";
        assert_eq!(optimize_url(cdn, &no_webp), cdn);
    }

    #[test]
    fn test_optimize_url_without_query() {
        let probe = StaticProbe { webp: true };
        assert_eq!(
            optimize_url("https://images.unsplash.com/photo-2", &probe),
            "https://images.unsplash.com/photo-2?fm=webp&q=85&w=800&h=600&fit=crop"
        );
    }

    #[test]
    fn test_sniff() {
        let info = sniff(PNG_BYTES).unwrap();
        assert_eq!(info.mime_type, "image/png");
        assert_eq!(info.extension, "png");
        assert_eq!(sniff(&[]), Err(ImageError::Empty));
        assert_eq!(sniff(b"hello world"), Err(ImageError::NotAnImage));
    }

    #[test]
    fn test_request_defers_until_visible() {
        let (mut loader, fetcher) = loader(false);
        let mut visible = VisibleSet::new();
        let url = "https://cdn.test/a.png";

        assert_eq!(loader.request(url, false, &visible), ImageState::Deferred);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);

        visible.insert(url);
        assert_eq!(loader.request(url, false, &visible), ImageState::Pending);

        let state = wait_settled(&mut loader, url);
        assert!(matches!(state, ImageState::Loaded(_)));
    }

    #[test]
    fn test_priority_fetches_once() {
        let (mut loader, fetcher) = loader(true);
        let hidden = VisibleSet::new();
        let url = "https://images.unsplash.com/photo-1?w=1470";

        loader.request(url, true, &hidden);
        loader.request(url, true, &hidden);
        wait_settled(&mut loader, url);
        loader.request(url, true, &hidden);

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
        assert_eq!(loader.pending_count(), 0);
    }

    #[test]
    fn test_failures_are_cached_not_propagated() {
        let (mut loader, _) = loader(false);
        let hidden = VisibleSet::new();

        loader.request("https://cdn.test/broken.png", true, &hidden);
        loader.request("https://cdn.test/text.html", true, &hidden);

        assert_eq!(
            wait_settled(&mut loader, "https://cdn.test/broken.png"),
            ImageState::Failed(ImageError::Fetch("404".to_string()))
        );
        assert_eq!(
            wait_settled(&mut loader, "https://cdn.test/text.html"),
            ImageState::Failed(ImageError::NotAnImage)
        );
    }

    #[test]
    fn test_preload_takes_first_three() {
        let (mut loader, fetcher) = loader(false);
        let urls = ["https://cdn.test/1", "https://cdn.test/2", "https://cdn.test/3", "https://cdn.test/4"];
        loader.preload(urls.iter().copied());

        for url in &urls[..3] {
            wait_settled(&mut loader, url);
        }
        assert!(loader.state(urls[3]).is_none());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_disabled_loader_never_fetches() {
        let mut loader = ImageLoader::disabled();
        let hidden = VisibleSet::new();
        assert_eq!(loader.request("https://cdn.test/1", true, &hidden), ImageState::Deferred);
        assert_eq!(loader.pending_count(), 0);
    }

    /// Answer one HTTP request on a local port, returns the URL to hit
    fn serve_once(status_line: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            let head = format!(
                "HTTP/1.1 {}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status_line,
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(body).unwrap();
        });
        format!("http://{}/photo.png", addr)
    }

    fn local_fetcher() -> HttpFetcher {
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        HttpFetcher::with_client(client)
    }

    #[test]
    fn test_http_fetcher_returns_body() {
        let url = serve_once("200 OK", PNG_BYTES);
        assert_eq!(local_fetcher().fetch(&url).unwrap(), PNG_BYTES.to_vec());
    }

    #[test]
    fn test_http_fetcher_maps_error_status() {
        let url = serve_once("404 Not Found", b"");
        match local_fetcher().fetch(&url) {
            Err(ImageError::Fetch(message)) => assert!(message.contains("404"), "{}", message),
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[test]
    fn test_http_fetcher_maps_connection_errors() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/photo.png", listener.local_addr().unwrap());
        drop(listener);
        assert!(matches!(local_fetcher().fetch(&url), Err(ImageError::Fetch(_))));
    }
}
