//! On-disk cache storage.
//!
//! Layout:
//!
//! ```text
//! <root>/
//!   <cache name>/
//!     <sha256(url)>.<ext>  response body, `<ext>` from the URL path
//!     <sha256(url)>.json   EntryMeta
//! ```
//!
//! Every file is written to a temp file, synced and then renamed into
//! place, so a reader never sees a half-written entry.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use url::Url;

use crate::error::{CacheError, Result};

/// A response as stored in (or served from) the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EntryMeta {
    url: String,
    status: u16,
    content_type: Option<String>,
    stored_at: DateTime<Utc>,
}

/// Key of an entry: hex SHA-256 of its URL.
pub fn entry_key(url: &str) -> String {
    hex::encode(Sha256::digest(url.as_bytes()))
}

fn io_error(operation: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> CacheError {
    let path = path.to_path_buf();
    move |source| CacheError::Io {
        operation,
        path,
        source,
    }
}

/// Extension kept on a body file so players can tell its format.
///
/// Taken from the last path segment of `url`; `body` when it has none or
/// when it would clash with the metadata or temp files.
fn body_extension(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|url| {
            let segment = url.path_segments()?.next_back()?.to_string();
            let (_, ext) = segment.rsplit_once('.')?;
            let ext = ext.to_ascii_lowercase();
            let valid = (1..=5).contains(&ext.len())
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
                && !matches!(ext.as_str(), "json" | "tmp");
            valid.then_some(ext)
        })
        .unwrap_or_else(|| "body".to_string())
}

/// Write `bytes` to `path` atomically.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let mut file = File::create(&temp_path).map_err(io_error("create", &temp_path))?;
    file.write_all(bytes).map_err(io_error("write", &temp_path))?;
    file.sync_all().map_err(io_error("sync", &temp_path))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename", path)(e));
    }
    Ok(())
}

// =============================================================================
// CACHE STORAGE
// =============================================================================

/// Collection of named caches under one root directory.
#[derive(Debug, Clone)]
pub struct CacheStorage {
    root: PathBuf,
}

impl CacheStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Open (creating if needed) the cache called `name`.
    pub fn open(&self, name: &str) -> Result<Cache> {
        validate_name(name)?;
        let dir = self.root.join(name);
        fs::create_dir_all(&dir).map_err(io_error("create directory", &dir))?;
        Ok(Cache {
            name: name.to_string(),
            dir,
        })
    }

    /// Names of every cache present, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("list", &self.root)(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(io_error("list", &self.root))?;
            if entry.path().is_dir()
                && let Some(name) = entry.file_name().to_str()
            {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Delete the cache called `name`. Returns whether it existed.
    pub fn delete(&self, name: &str) -> Result<bool> {
        validate_name(name)?;
        let dir = self.root.join(name);
        match fs::remove_dir_all(&dir) {
            Ok(()) => {
                info!(cache = name, "Deleted cache");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error("delete", &dir)(e)),
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    let plain = !name.is_empty()
        && name != "."
        && name != ".."
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if plain {
        Ok(())
    } else {
        Err(CacheError::InvalidCacheName(name.to_string()))
    }
}

// =============================================================================
// CACHE
// =============================================================================

/// One named cache of URL-keyed responses.
#[derive(Debug, Clone)]
pub struct Cache {
    name: String,
    dir: PathBuf,
}

impl Cache {
    pub fn name(&self) -> &str {
        &self.name
    }

    fn paths(&self, url: &str) -> (PathBuf, PathBuf) {
        let key = entry_key(url);
        (
            self.dir.join(format!("{key}.{}", body_extension(url))),
            self.dir.join(format!("{key}.json")),
        )
    }

    /// Look up the response stored for `url`.
    pub fn match_url(&self, url: &str) -> Result<Option<CachedResponse>> {
        let (body_path, meta_path) = self.paths(url);

        let meta_bytes = match fs::read(&meta_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error("read", &meta_path)(e)),
        };
        let meta: EntryMeta =
            serde_json::from_slice(&meta_bytes).map_err(|source| CacheError::Metadata { source })?;
        if meta.url != url {
            return Ok(None);
        }

        let body = match fs::read(&body_path) {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error("read", &body_path)(e)),
        };

        debug!(cache = %self.name, url, "Cache hit");
        Ok(Some(CachedResponse {
            url: meta.url,
            status: meta.status,
            content_type: meta.content_type,
            body,
        }))
    }

    /// Store `response` under its URL, replacing any previous entry.
    ///
    /// The body is written before the metadata; an entry only becomes
    /// visible once both are in place.
    pub fn put(&self, response: &CachedResponse) -> Result<()> {
        let (body_path, meta_path) = self.paths(&response.url);
        let meta = EntryMeta {
            url: response.url.clone(),
            status: response.status,
            content_type: response.content_type.clone(),
            stored_at: Utc::now(),
        };
        let meta_bytes =
            serde_json::to_vec_pretty(&meta).map_err(|source| CacheError::Metadata { source })?;

        write_atomic(&body_path, &response.body)?;
        write_atomic(&meta_path, &meta_bytes)?;
        debug!(cache = %self.name, url = %response.url, bytes = response.body.len(), "Cached");
        Ok(())
    }

    /// Remove the entry stored for `url`. Returns whether one existed.
    ///
    /// The metadata goes first, so a half-removed entry is never matched.
    pub fn remove(&self, url: &str) -> Result<bool> {
        let (body_path, meta_path) = self.paths(url);
        let mut existed = false;
        let mut failure = None;
        for path in [&meta_path, &body_path] {
            match fs::remove_file(path) {
                Ok(()) => existed = true,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    if failure.is_none() {
                        failure = Some(io_error("remove", path)(e));
                    }
                }
            }
        }
        if let Some(err) = failure {
            return Err(err);
        }
        if existed {
            debug!(cache = %self.name, url, "Removed");
        }
        Ok(existed)
    }

    /// Path of the cached body for `url`, if present.
    pub fn body_path(&self, url: &str) -> Result<Option<PathBuf>> {
        let (body_path, _) = self.paths(url);
        Ok(self.match_url(url)?.map(|_| body_path))
    }
}
