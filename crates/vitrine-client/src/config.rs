//! Client configuration loaded from environment variables.
//!
//! All settings have defaults, so the client runs with zero configuration.

use std::path::PathBuf;

/// Default log filter when neither `RUST_LOG` nor `VITRINE_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "vitrine=info,vitrine_client_lib=info,vitrine_store=info,warn";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Explicit database file.
    /// Env: `VITRINE_DB_PATH`
    /// Default: `None` (platform data directory, see `Database::new`).
    pub db_path: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset.
    /// Env: `VITRINE_LOG`
    /// Default: [`DEFAULT_LOG_FILTER`]
    pub log_filter: String,

    /// Problems found while reading the environment. Loading happens before
    /// the tracing subscriber exists, so the caller logs these afterwards.
    pub warnings: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            warnings: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("VITRINE_DB_PATH") {
            if path.trim().is_empty() {
                config
                    .warnings
                    .push("VITRINE_DB_PATH is empty, using default location".to_string());
            } else {
                config.db_path = Some(PathBuf::from(path));
            }
        }

        if let Some(filter) = lookup("VITRINE_LOG") {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::from_lookup(|_| None);
        assert!(config.db_path.is_none());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(|key| match key {
            "VITRINE_DB_PATH" => Some("/tmp/gallery.db".into()),
            "VITRINE_LOG" => Some("debug".into()),
            _ => None,
        });
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/gallery.db")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = ClientConfig::from_lookup(|_| Some("  ".into()));
        assert!(config.db_path.is_none());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_blank_db_path_is_reported() {
        let config = ClientConfig::from_lookup(|key| match key {
            "VITRINE_DB_PATH" => Some(" ".into()),
            _ => None,
        });
        assert_eq!(
            config.warnings,
            vec!["VITRINE_DB_PATH is empty, using default location".to_string()]
        );

        assert!(ClientConfig::from_lookup(|_| None).warnings.is_empty());
    }
}
