//! Offline asset cache.
//!
//! A process-wide key-value store of static responses, bucketed under an
//! explicit version tag. Installing populates the current bucket from the
//! manifest's precache list, activation deletes every bucket carrying a stale
//! tag, and fetching serves cache-first with a network fallback. When both
//! miss, a fixed offline notice page is returned. Entirely independent of the
//! drawing engine.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::{info, warn};
use parking_lot::RwLock;
use serde::Deserialize;
use thiserror::Error;

/// Version tag of the asset store. Bump to force clients onto fresh assets.
pub const CACHE_VERSION: &str = "mini-paint-v2";

/// Embedded asset manifest: the precache list served on install.
const MANIFEST_JSON: &str = r#"{
  "version": "mini-paint-v2",
  "precache": ["/", "/index.html", "/src/main.js", "/src/style.css"]
}"#;

/// Served when the network fails and nothing is cached.
const OFFLINE_PAGE: &str = "<!DOCTYPE html><html><body><h1>🎨 Mini Paint</h1>\
<p>You are offline. Please check your connection.</p></body></html>";

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub precache: Vec<String>,
}

impl Manifest {
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(MANIFEST_JSON)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network unreachable: {0}")]
    Network(String),
    #[error("{0} not found upstream")]
    NotFound(String),
}

/// One stored response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    pub content_type: String,
    pub body: Vec<u8>,
}

impl CachedResponse {
    pub fn html(body: &str) -> Self {
        Self {
            content_type: "text/html".to_owned(),
            body: body.as_bytes().to_vec(),
        }
    }
}

fn offline_page() -> CachedResponse {
    CachedResponse::html(OFFLINE_PAGE)
}

/// Where assets come from when the cache has no copy.
pub trait RemoteSource {
    fn fetch(&self, path: &str) -> Result<CachedResponse, FetchError>;
}

/// The versioned response store.
pub struct AssetCache {
    version: String,
    buckets: RwLock<HashMap<String, HashMap<String, CachedResponse>>>,
}

impl AssetCache {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_owned(),
            buckets: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide store, tagged with [`CACHE_VERSION`].
    pub fn global() -> &'static AssetCache {
        static STORE: OnceLock<AssetCache> = OnceLock::new();
        STORE.get_or_init(|| AssetCache::new(CACHE_VERSION))
    }

    /// Populate the current bucket from the manifest's precache list.
    /// Population failure is logged and ignored; install never fails the
    /// caller.
    pub fn install(&self, manifest: &Manifest, source: &dyn RemoteSource) {
        let mut buckets = self.buckets.write();
        let bucket = buckets.entry(self.version.clone()).or_default();
        for path in &manifest.precache {
            match source.fetch(path) {
                Ok(response) => {
                    bucket.insert(path.clone(), response);
                }
                Err(err) => warn!("cache install failed for {path}: {err}"),
            }
        }
    }

    /// Reconciliation: drop every bucket whose version tag is not the current
    /// one. Safe to call at any time; repeat calls are no-ops.
    pub fn activate(&self) {
        let mut buckets = self.buckets.write();
        buckets.retain(|tag, _| {
            if tag == &self.version {
                true
            } else {
                info!("deleting old cache: {tag}");
                false
            }
        });
    }

    /// Cache-first lookup with network fallback. A successful network
    /// response is stored for next time; on failure with no cached entry the
    /// offline notice page is returned. `manifest.json` is always fetched
    /// fresh.
    pub fn fetch(&self, path: &str, source: &dyn RemoteSource) -> CachedResponse {
        if path.ends_with("manifest.json") {
            return source.fetch(path).unwrap_or_else(|_| offline_page());
        }

        if let Some(hit) = self.cached(path) {
            return hit;
        }

        match source.fetch(path) {
            Ok(response) => {
                self.buckets
                    .write()
                    .entry(self.version.clone())
                    .or_default()
                    .insert(path.to_owned(), response.clone());
                response
            }
            Err(err) => {
                warn!("fetch failed for {path}, serving offline page: {err}");
                offline_page()
            }
        }
    }

    fn cached(&self, path: &str) -> Option<CachedResponse> {
        self.buckets
            .read()
            .get(&self.version)
            .and_then(|bucket| bucket.get(path))
            .cloned()
    }

    #[cfg(test)]
    fn bucket_count(&self) -> usize {
        self.buckets.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Upstream with a fixed set of known paths; optionally unplugged.
    struct FakeRemote {
        known: HashSet<&'static str>,
        online: bool,
    }

    impl FakeRemote {
        fn new(paths: &[&'static str]) -> Self {
            Self {
                known: paths.iter().copied().collect(),
                online: true,
            }
        }

        fn offline() -> Self {
            Self {
                known: HashSet::new(),
                online: false,
            }
        }
    }

    impl RemoteSource for FakeRemote {
        fn fetch(&self, path: &str) -> Result<CachedResponse, FetchError> {
            if !self.online {
                return Err(FetchError::Network("unplugged".to_owned()));
            }
            if self.known.contains(path) {
                Ok(CachedResponse::html(path))
            } else {
                Err(FetchError::NotFound(path.to_owned()))
            }
        }
    }

    #[test]
    fn test_embedded_manifest_parses() {
        let manifest = Manifest::embedded().unwrap();
        assert_eq!(manifest.version, CACHE_VERSION);
        assert!(manifest.precache.contains(&"/index.html".to_owned()));
    }

    #[test]
    fn test_install_populates_the_current_bucket() {
        let cache = AssetCache::new("v1");
        let manifest = Manifest {
            version: "v1".to_owned(),
            precache: vec!["/a".to_owned(), "/b".to_owned()],
        };
        cache.install(&manifest, &FakeRemote::new(&["/a", "/b"]));

        let offline = FakeRemote::offline();
        assert_eq!(cache.fetch("/a", &offline), CachedResponse::html("/a"));
        assert_eq!(cache.fetch("/b", &offline), CachedResponse::html("/b"));
    }

    #[test]
    fn test_install_failures_are_ignored_per_entry() {
        let cache = AssetCache::new("v1");
        let manifest = Manifest {
            version: "v1".to_owned(),
            precache: vec!["/present".to_owned(), "/missing".to_owned()],
        };
        cache.install(&manifest, &FakeRemote::new(&["/present"]));

        let offline = FakeRemote::offline();
        assert_eq!(
            cache.fetch("/present", &offline),
            CachedResponse::html("/present")
        );
        // the missing entry fell back to the offline notice
        assert_eq!(cache.fetch("/missing", &offline), super::offline_page());
    }

    #[test]
    fn test_activate_deletes_stale_versions() {
        let old = AssetCache::new("v1");
        let manifest = Manifest {
            version: "v1".to_owned(),
            precache: vec!["/a".to_owned()],
        };
        old.install(&manifest, &FakeRemote::new(&["/a"]));

        // same store, now tagged v2
        let upgraded = AssetCache {
            version: "v2".to_owned(),
            buckets: RwLock::new(old.buckets.into_inner()),
        };
        assert_eq!(upgraded.bucket_count(), 1);
        upgraded.activate();
        assert_eq!(upgraded.bucket_count(), 0);
        upgraded.activate();
        assert_eq!(upgraded.bucket_count(), 0);
    }

    #[test]
    fn test_successful_fetches_are_cached_for_later() {
        let cache = AssetCache::new("v1");
        let first = cache.fetch("/page", &FakeRemote::new(&["/page"]));
        assert_eq!(first, CachedResponse::html("/page"));

        // network gone, the cached copy is served
        let second = cache.fetch("/page", &FakeRemote::offline());
        assert_eq!(second, first);
    }

    #[test]
    fn test_total_miss_serves_the_offline_page() {
        let cache = AssetCache::new("v1");
        let response = cache.fetch("/nowhere", &FakeRemote::offline());
        assert_eq!(response.content_type, "text/html");
        assert!(String::from_utf8(response.body).unwrap().contains("offline"));
    }

    #[test]
    fn test_manifest_json_bypasses_the_cache() {
        let cache = AssetCache::new("v1");
        // a stale copy sneaks into the bucket
        cache
            .buckets
            .write()
            .entry("v1".to_owned())
            .or_default()
            .insert(
                "/manifest.json".to_owned(),
                CachedResponse::html("stale"),
            );

        let fresh = cache.fetch("/manifest.json", &FakeRemote::new(&["/manifest.json"]));
        assert_eq!(fresh, CachedResponse::html("/manifest.json"));
    }
}
