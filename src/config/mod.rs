//! Application configuration module
//!
//! Configuration is loaded from environment variables with the
//! `LEADERSHIP_DIAGNOSIS` prefix; nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use leadership_diagnosis::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod content;
mod database;
mod diagnosis;
mod error;
mod features;
mod server;

pub use content::{ContentConfig, ContentSource};
pub use database::DatabaseConfig;
pub use diagnosis::{DiagnosisConfig, SELECTION_LIMIT_CEILING};
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// service backed by embedded content and in-memory storage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL connection; absent means in-memory storage
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub diagnosis: DiagnosisConfig,

    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables such as
    /// `LEADERSHIP_DIAGNOSIS__SERVER__PORT=8080` (`server.port`) or
    /// `LEADERSHIP_DIAGNOSIS__DATABASE__URL=...` (`database.url`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LEADERSHIP_DIAGNOSIS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any section is invalid, or if content is
    /// read from PostgreSQL without a database configured.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        if self.content.source == ContentSource::Postgres && self.database.is_none() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        self.diagnosis.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "LEADERSHIP_DIAGNOSIS__DATABASE__URL",
        "LEADERSHIP_DIAGNOSIS__SERVER__PORT",
        "LEADERSHIP_DIAGNOSIS__SERVER__ENVIRONMENT",
        "LEADERSHIP_DIAGNOSIS__CONTENT__SOURCE",
        "LEADERSHIP_DIAGNOSIS__DIAGNOSIS__MAX_SELECTED_CONCERNS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        let config = result.unwrap();
        assert!(config.database.is_none());
        assert_eq!(config.content.source, ContentSource::Static);
        assert_eq!(config.diagnosis.max_selected_concerns, 3);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_database_and_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(
            "LEADERSHIP_DIAGNOSIS__DATABASE__URL",
            "postgresql://test@localhost/test",
        );
        env::set_var("LEADERSHIP_DIAGNOSIS__SERVER__PORT", "3000");
        env::set_var("LEADERSHIP_DIAGNOSIS__CONTENT__SOURCE", "postgres");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.database.as_ref().map(|db| db.url.as_str()),
            Some("postgresql://test@localhost/test")
        );
        assert_eq!(config.content.source, ContentSource::Postgres);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("LEADERSHIP_DIAGNOSIS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().server.is_production());
    }

    #[test]
    fn test_postgres_content_requires_database() {
        let config = AppConfig {
            content: ContentConfig {
                source: ContentSource::Postgres,
                seed_on_start: true,
            },
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("DATABASE__URL"))
        );
    }

    #[test]
    fn test_invalid_selection_limit_fails_validation() {
        let config = AppConfig {
            diagnosis: DiagnosisConfig {
                max_selected_concerns: 0,
            },
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSelectionLimit { .. })
        ));
    }
}
