//! Versioned offline cache with install / fetch / activate phases.
//!
//! - `install()` opens the current cache and pre-fetches the manifest.
//!   Any failure fails the install; entries it already wrote are removed.
//! - `fetch()` answers from the cache first. A miss goes to the network,
//!   and only a `200` from a trusted origin is written through.
//! - `activate()` deletes every cache whose name is not the current version.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};
use url::{Origin, Url};

use crate::error::{CacheError, Result};
use crate::fetcher::{FetchedResponse, Fetcher};
use crate::storage::{Cache, CacheStorage, CachedResponse};

/// Name of the current cache.
pub const CACHE_NAME: &str = "universe-guidance-v5";

/// Assets pre-fetched on install, relative to the app origin.
pub const DEFAULT_MANIFEST: [&str; 7] = [
    "./",
    "./index.html",
    "./main.js",
    "./manifest.webmanifest",
    "./favicon.svg",
    "./assets/icons/icon-192.svg",
    "./assets/icons/icon-512.svg",
];

// =============================================================================
// CONFIG
// =============================================================================

/// What to cache and where it comes from.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Current cache name. Older names are removed on activate.
    pub version: String,
    /// Origin relative manifest entries resolve against.
    pub origin: Url,
    /// Absolute URLs pre-fetched on install.
    pub manifest: Vec<Url>,
    /// Extra origins whose responses may be written through.
    pub trusted: Vec<Origin>,
}

impl CacheConfig {
    /// Config for `origin` with the default web manifest.
    pub fn new(origin: Url) -> Result<Self> {
        let manifest = DEFAULT_MANIFEST
            .iter()
            .map(|entry| resolve(&origin, entry))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            version: CACHE_NAME.to_string(),
            origin,
            manifest,
            trusted: Vec::new(),
        })
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Replace the manifest with `entries`, resolved against the origin.
    pub fn with_manifest<'a>(mut self, entries: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        self.manifest = entries
            .into_iter()
            .map(|entry| resolve(&self.origin, entry))
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// Also write through responses from `url`'s origin.
    pub fn trust_origin_of(mut self, url: &Url) -> Self {
        let origin = url.origin();
        if !self.trusted.contains(&origin) {
            self.trusted.push(origin);
        }
        self
    }

    fn is_trusted(&self, url: &Url) -> bool {
        let origin = url.origin();
        origin == self.origin.origin() || self.trusted.contains(&origin)
    }
}

fn resolve(origin: &Url, entry: &str) -> Result<Url> {
    origin.join(entry).map_err(|e| CacheError::InvalidUrl {
        url: entry.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// OFFLINE CACHE
// =============================================================================

/// Offline cache over a [`CacheStorage`] and a [`Fetcher`].
///
/// File system work runs on the blocking pool so callers can await
/// these methods from the GUI executor.
#[derive(Clone)]
pub struct OfflineCache {
    storage: CacheStorage,
    config: CacheConfig,
    fetcher: Arc<dyn Fetcher>,
}

impl std::fmt::Debug for OfflineCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfflineCache")
            .field("storage", &self.storage)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OfflineCache {
    pub fn new(storage: CacheStorage, config: CacheConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            storage,
            config,
            fetcher,
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    async fn current(&self) -> Result<Cache> {
        let storage = self.storage.clone();
        let version = self.config.version.clone();
        blocking(move || storage.open(&version)).await
    }

    /// Open the current cache and store every manifest entry.
    ///
    /// All entries are fetched before any is written, so a failed fetch
    /// writes nothing. When a write fails partway, the entries of this batch
    /// written so far are removed again.
    pub async fn install(&self) -> Result<usize> {
        let cache = self.current().await?;
        info!(cache = cache.name(), entries = self.config.manifest.len(), "Installing offline cache");

        let mut batch = Vec::with_capacity(self.config.manifest.len());
        for url in &self.config.manifest {
            let fetched = self.fetcher.fetch(url).await?;
            if fetched.status != 200 {
                warn!(%url, status = fetched.status, "Install aborted");
                return Err(CacheError::BadStatus {
                    url: url.to_string(),
                    status: fetched.status,
                });
            }
            batch.push(cached(url, fetched));
        }

        let count = batch.len();
        blocking(move || store_all(&cache, &batch)).await?;
        info!(count, "Offline cache installed");
        Ok(count)
    }

    /// Cache-first fetch of `url`.
    pub async fn fetch(&self, url: &Url) -> Result<CachedResponse> {
        let cache = self.current().await?;
        let key = url.to_string();
        let lookup = cache.clone();
        if let Some(hit) = blocking(move || lookup.match_url(&key)).await? {
            return Ok(hit);
        }

        debug!(%url, "Cache miss");
        let response = cached(url, self.fetcher.fetch(url).await?);
        if response.status == 200 && self.config.is_trusted(url) {
            let stored = response.clone();
            blocking(move || cache.put(&stored)).await?;
        }
        Ok(response)
    }

    /// Fetch `url` through the cache and return the cached file.
    ///
    /// Fails when the response could not be cached.
    pub async fn fetch_to_file(&self, url: &Url) -> Result<PathBuf> {
        let response = self.fetch(url).await?;
        let cache = self.current().await?;
        let key = url.to_string();
        match blocking(move || cache.body_path(&key)).await? {
            Some(path) => Ok(path),
            None => Err(CacheError::BadStatus {
                url: url.to_string(),
                status: response.status,
            }),
        }
    }

    /// Delete every cache other than the current version.
    pub async fn activate(&self) -> Result<Vec<String>> {
        let storage = self.storage.clone();
        let version = self.config.version.clone();
        let deleted = blocking(move || {
            let mut deleted = Vec::new();
            for name in storage.keys()? {
                if name != version && storage.delete(&name)? {
                    deleted.push(name);
                }
            }
            Ok(deleted)
        })
        .await?;
        if !deleted.is_empty() {
            info!(?deleted, "Removed old offline caches");
        }
        Ok(deleted)
    }
}

/// Put every response, or none of them.
fn store_all(cache: &Cache, batch: &[CachedResponse]) -> Result<()> {
    for (written, response) in batch.iter().enumerate() {
        if let Err(err) = cache.put(response) {
            warn!(url = %response.url, error = %err, "Install write failed, rolling back");
            for stored in &batch[..=written] {
                if let Err(cleanup) = cache.remove(&stored.url) {
                    warn!(url = %stored.url, error = %cleanup, "Rollback incomplete");
                }
            }
            return Err(err);
        }
    }
    Ok(())
}

fn cached(url: &Url, fetched: FetchedResponse) -> CachedResponse {
    CachedResponse {
        url: url.to_string(),
        status: fetched.status,
        content_type: fetched.content_type,
        body: fetched.body,
    }
}

async fn blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| CacheError::Task(e.to_string()))?
}
