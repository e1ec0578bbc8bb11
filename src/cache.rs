use crate::api::client::DataDragonClient;
use crate::api::endpoints::DEFAULT_DDRAGON_VERSION;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Re-fetch the Data Dragon version after a day.
pub const VERSION_MAX_AGE_MINS: u64 = 24 * 60;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VersionCache {
    pub version: String,
    pub fetched_at: DateTime<Utc>,
}

impl VersionCache {
    pub fn new(version: &str) -> Self {
        VersionCache {
            version: version.to_string(),
            fetched_at: Utc::now(),
        }
    }

    pub fn get_cache_path() -> PathBuf {
        let cache_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".vs_lol");

        cache_dir.join("ddragon.json")
    }

    /// `Ok(None)` when nothing has been cached yet.
    pub fn load(path: &Path) -> Result<Option<Self>, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)
                .map(Some)
                .map_err(|e| AppError::JsonError(format!("Failed to parse cache: {}", e))),
            Err(_) => Ok(None),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::JsonError(format!("Failed to serialize cache: {}", e))
        })?;

        fs::write(path, json)?;

        Ok(())
    }

    pub fn is_stale(&self, max_age_mins: u64) -> bool {
        let age = Utc::now().signed_duration_since(self.fetched_at);
        age.num_minutes() > max_age_mins as i64
    }
}

/// Pick the Data Dragon patch used for champion icons.
///
/// Order: pinned value, fresh cache, network (only with `refresh`), stale
/// cache, built-in default. Network failures never abort startup.
pub fn resolve_ddragon_version(pinned: Option<&str>, refresh: bool, cache_path: &Path) -> String {
    if let Some(version) = pinned {
        return version.to_string();
    }

    let cached = VersionCache::load(cache_path).unwrap_or_else(|e| {
        log::warn!("ignoring unreadable version cache: {}", e);
        None
    });

    let fresh = cached
        .as_ref()
        .filter(|c| !c.is_stale(VERSION_MAX_AGE_MINS))
        .map(|c| c.version.clone());
    if let Some(version) = fresh {
        return version;
    }

    if refresh {
        match DataDragonClient::new().latest_version() {
            Ok(version) => {
                log::info!("Data Dragon version {}", version);
                if let Err(e) = VersionCache::new(&version).save(cache_path) {
                    log::warn!("could not cache Data Dragon version: {}", e);
                }
                return version;
            }
            Err(e) => log::warn!("Data Dragon lookup failed: {}", e),
        }
    }

    cached
        .map(|c| c.version)
        .unwrap_or_else(|| DEFAULT_DDRAGON_VERSION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn pinned_version_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ddragon.json");
        VersionCache::new("13.1.1").save(&path).unwrap();
        assert_eq!(resolve_ddragon_version(Some("14.1.1"), false, &path), "14.1.1");
    }

    #[test]
    fn falls_back_to_default_without_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ddragon.json");
        assert_eq!(
            resolve_ddragon_version(None, false, &path),
            DEFAULT_DDRAGON_VERSION
        );
    }

    #[test]
    fn stale_cache_is_still_used_offline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ddragon.json");
        let mut cache = VersionCache::new("13.24.1");
        cache.fetched_at = Utc::now() - Duration::days(3);
        cache.save(&path).unwrap();

        assert!(cache.is_stale(VERSION_MAX_AGE_MINS));
        assert_eq!(resolve_ddragon_version(None, false, &path), "13.24.1");
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ddragon.json");
        let cache = VersionCache::new("14.19.1");
        cache.save(&path).unwrap();
        assert_eq!(VersionCache::load(&path).unwrap(), Some(cache));
    }
}
