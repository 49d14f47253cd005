//! API endpoint settings and base-URL resolution.

use serde::{Deserialize, Serialize};

/// Port the backend listens on when only a host is configured.
pub const DEFAULT_API_PORT: u16 = 5000;

/// Fallback base when nothing is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// API endpoint settings, as stored under `[api]` in the config file.
///
/// Session cookies are scoped to the exact host name the backend issued
/// them for, so `host` must match the backend's host literally:
/// `localhost` and `127.0.0.1` are different hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Full API base URL, e.g. `http://localhost:5000/api`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Bare backend host, completed with the well-known port and `/api`
    /// prefix. Ignored when `base_url` is set.
    #[serde(default)]
    pub host: Option<String>,
}

impl ApiSettings {
    /// Resolves the API base URL, once per process.
    ///
    /// Precedence: explicit override (flag/environment) > configured
    /// `base_url` > configured `host` > local fallback. The result never
    /// ends in a trailing slash.
    pub fn resolve_base(&self, override_url: Option<&str>) -> String {
        let base = override_url
            .map(str::to_owned)
            .or_else(|| self.base_url.clone())
            .or_else(|| {
                self.host
                    .as_deref()
                    .map(|host| format!("http://{host}:{DEFAULT_API_PORT}/api"))
            })
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        base.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_over_everything() {
        let settings = ApiSettings {
            base_url: Some("http://configured:5000/api".into()),
            host: Some("confhost".into()),
        };
        assert_eq!(
            settings.resolve_base(Some("https://explicit/api/")),
            "https://explicit/api"
        );
    }

    #[test]
    fn test_base_url_wins_over_host() {
        let settings = ApiSettings {
            base_url: Some("http://configured:8080/api".into()),
            host: Some("confhost".into()),
        };
        assert_eq!(settings.resolve_base(None), "http://configured:8080/api");
    }

    #[test]
    fn test_host_is_completed_with_port_and_prefix() {
        let settings = ApiSettings {
            base_url: None,
            host: Some("127.0.0.1".into()),
        };
        assert_eq!(settings.resolve_base(None), "http://127.0.0.1:5000/api");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(
            ApiSettings::default().resolve_base(None),
            DEFAULT_API_BASE
        );
    }
}
