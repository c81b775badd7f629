//! Offline asset cache for The Universe Guidance.
//!
//! A versioned, URL-keyed cache on the local file system. The app installs
//! the current version at startup, serves assets cache-first and drops
//! older versions on activate.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use tug_offline::{CacheConfig, CacheStorage, HttpFetcher, OfflineCache};
//! use url::Url;
//!
//! # async fn run() -> tug_offline::Result<()> {
//! let config = CacheConfig::new(Url::parse("https://guidance.example/").unwrap())?;
//! let fetcher = Arc::new(HttpFetcher::new(Duration::from_secs(30))?);
//! let cache = OfflineCache::new(CacheStorage::new("/tmp/tug-cache"), config, fetcher);
//!
//! cache.install().await?;
//! cache.activate().await?;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod fetcher;
pub mod offline;
pub mod storage;

pub use error::{CacheError, Result};
pub use fetcher::{FetchedResponse, Fetcher, HttpFetcher};
pub use offline::{CACHE_NAME, CacheConfig, DEFAULT_MANIFEST, OfflineCache};
pub use storage::{Cache, CacheStorage, CachedResponse};
