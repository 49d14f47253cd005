//! Configuration file loading.
//!
//! Reads `~/.config/sentipulse/config.toml` once and caches it; a missing
//! or unreadable file falls back to defaults so the client always starts.

use sentipulse_core::config::ApiSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Root of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiSettings,
}

/// Configuration service that loads and caches the file config.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    config: Arc<RwLock<Option<FileConfig>>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get(&self) -> FileConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(cached) = read_lock.as_ref() {
                return cached.clone();
            }
        }

        let loaded = Self::load().unwrap_or_default();

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    /// The configuration file path, `~/.config/sentipulse/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sentipulse").join("config.toml"))
    }

    fn load() -> Option<FileConfig> {
        let path = Self::config_path()?;
        let raw = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&raw) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Ignoring unparseable config at {}: {err}", path.display());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_api_section() {
        let config: FileConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://analysis-box:5000/api"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://analysis-box:5000/api")
        );
        assert!(config.api.host.is_none());
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }
}
