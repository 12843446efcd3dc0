//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file overlaid with `JOBBOARD__*` environment variables.
//! Every section has defaults, so a missing file yields a usable config.

pub mod api;
pub mod logging;
pub mod search;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::logging::LoggingConfig;
pub use self::search::SearchConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Persisted session settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Search and autocomplete settings.
    #[serde(default)]
    pub search: SearchConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges `config/default.toml`, the given file, and environment
    /// variables prefixed with `JOBBOARD_` (nested keys separated by `__`).
    /// Both files are optional.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("JOBBOARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("search.reference_cities")
                    .with_list_parse_key("search.employment_types"),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_any_file() {
        let config = AppConfig::load("does/not/exist").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.search.reference_cities.len(), 30);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("custom.toml");
        std::fs::write(
            &file,
            "[api]\nbase_url = \"https://jobs.example.com\"\ntimeout_seconds = 5\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = AppConfig::load(file.to_str().unwrap()).unwrap();
        assert_eq!(config.api.base_url, "https://jobs.example.com");
        assert_eq!(config.api.timeout_seconds, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.session.storage_path, "data/session.json");
    }
}
