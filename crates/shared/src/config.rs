//! Application configuration management.

use serde::Deserialize;

/// Application configuration, loaded once at startup from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database connection URL.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Host to bind the HTTP server to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Enables verbose diagnostics (not tied to log level).
    #[serde(default)]
    pub debug: bool,
    /// Deployment environment name, e.g. `development`, `production`.
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_database_url() -> String {
    "postgres://localhost/ledgerbank".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_environment() -> String {
    "development".to_string()
}

impl AppConfig {
    /// Loads configuration from environment variables, with every field
    /// optional and defaulted for a local dev server.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable is present but cannot be
    /// deserialized into its target type (e.g. `PORT` is not a number).
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .set_default("database_url", default_database_url())?
            .set_default("host", default_host())?
            .set_default("port", i64::from(default_port()))?
            .set_default("debug", false)?
            .set_default("environment", default_environment())?
            .add_source(config::Environment::default())
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_falls_back_to_defaults_when_unset() {
        temp_env::with_vars_unset(["DATABASE_URL", "HOST", "PORT", "DEBUG", "ENVIRONMENT"], || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8080);
            assert!(!config.debug);
            assert_eq!(config.environment, "development");
        });
    }

    #[test]
    fn load_picks_up_environment_overrides() {
        temp_env::with_vars(
            [("HOST", Some("127.0.0.1")), ("PORT", Some("9090")), ("DEBUG", Some("true"))],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.host, "127.0.0.1");
                assert_eq!(config.port, 9090);
                assert!(config.debug);
            },
        );
    }
}
