//! Offline cache setup for the desktop app.
//!
//! The cache pre-fetches every mantra recording so the soundscape keeps
//! playing without a network. Older cache versions are removed once the
//! current one is installed.

use std::sync::Arc;
use std::time::Duration;

use tug_core::catalog::MANTRA_CATEGORIES;
use tug_offline::{CacheConfig, CacheStorage, HttpFetcher, OfflineCache};
use url::Url;

use crate::settings::Settings;

/// Build the offline cache from the settings.
pub fn build_offline_cache(settings: &Settings) -> Result<OfflineCache, String> {
    let audio_urls = MANTRA_CATEGORIES
        .iter()
        .flat_map(|category| category.mantras)
        .map(|mantra| mantra.audio_url)
        .collect::<Vec<_>>();

    let origin = audio_urls
        .first()
        .copied()
        .map(Url::parse)
        .transpose()
        .map_err(|e| format!("Invalid mantra URL: {}", e))?
        .ok_or_else(|| "No mantra recordings to cache".to_string())?;

    let mut config = CacheConfig::new(origin)
        .and_then(|config| config.with_manifest(audio_urls.iter().copied()))
        .map_err(|e| e.to_string())?
        .with_version(settings.offline.cache_version.clone());
    for url in config.manifest.clone() {
        config = config.trust_origin_of(&url);
    }

    let fetcher = HttpFetcher::new(Duration::from_secs(settings.gemini.timeout_secs.max(1)))
        .map_err(|e| e.to_string())?;
    Ok(OfflineCache::new(
        CacheStorage::new(Settings::cache_dir()),
        config,
        Arc::new(fetcher),
    ))
}

/// Install the current cache, then drop older versions.
///
/// Returns the number of entries installed.
pub async fn prepare_offline_cache(cache: OfflineCache) -> Result<usize, String> {
    let installed = cache.install().await.map_err(|e| {
        tracing::warn!(error = %e, "Offline cache install failed");
        e.user_message()
    })?;
    cache.activate().await.map_err(|e| {
        tracing::warn!(error = %e, "Offline cache activate failed");
        e.user_message()
    })?;
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_holds_mantra_recordings() {
        let mut settings = Settings::default();
        settings.offline.cache_version = "universe-guidance-test".to_string();

        let cache = build_offline_cache(&settings).unwrap();
        let config = cache.config();

        assert_eq!(config.version, "universe-guidance-test");
        assert_eq!(
            config.manifest.iter().map(Url::as_str).collect::<Vec<_>>(),
            vec![MANTRA_CATEGORIES[0].mantras[0].audio_url]
        );
        assert_eq!(config.origin.as_str(), MANTRA_CATEGORIES[0].mantras[0].audio_url);
    }
}
