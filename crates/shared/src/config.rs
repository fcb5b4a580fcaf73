//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Runtime behaviour (environment name, debug output, CORS, logging).
    #[serde(default)]
    pub app: AppSettings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait for a pooled connection.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    10
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Runtime settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Deployment environment name (`development`, `production`, ...).
    #[serde(default = "default_env")]
    pub env: String,
    /// Include underlying error text in 500 responses.
    #[serde(default)]
    pub debug: bool,
    /// Origins allowed by CORS. `*` allows any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            env: default_env(),
            debug: false,
            cors_origins: default_cors_origins(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppSettings {
    /// Returns true when running in the development environment.
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.env.eq_ignore_ascii_case("development")
    }

    /// Log filter used when `RUST_LOG` is unset.
    ///
    /// Development logs at `debug`; every other environment logs at `warn`.
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_development() {
            "polimoney=debug,tower_http=debug"
        } else {
            "polimoney=warn,tower_http=warn"
        }
    }
}

fn default_env() -> String {
    "development".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:8080".to_string(),
    ]
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `POLIMONEY__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, e.g. when
    /// `database.url` is missing.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("POLIMONEY")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("app.cors_origins")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_with_defaults() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test-none")),
                ("POLIMONEY__DATABASE__URL", Some("postgres://localhost/polimoney")),
                ("POLIMONEY__SERVER__PORT", None),
                ("POLIMONEY__APP__DEBUG", None),
                ("POLIMONEY__APP__CORS_ORIGINS", None),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.database.url, "postgres://localhost/polimoney");
                assert_eq!(config.database.max_connections, 10);
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.server.port, 8000);
                assert!(!config.app.debug);
                assert!(config.app.is_development());
                assert_eq!(config.app.cors_origins.len(), 2);
                assert_eq!(config.app.log_format, LogFormat::Pretty);
            },
        );
    }

    #[test]
    fn test_load_overrides_from_env() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test-none")),
                ("POLIMONEY__DATABASE__URL", Some("postgres://db/polimoney")),
                ("POLIMONEY__SERVER__PORT", Some("9000")),
                ("POLIMONEY__APP__DEBUG", Some("true")),
                ("POLIMONEY__APP__ENV", Some("production")),
                (
                    "POLIMONEY__APP__CORS_ORIGINS",
                    Some("https://polimoney.example,https://admin.example"),
                ),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 9000);
                assert!(config.app.debug);
                assert!(!config.app.is_development());
                assert_eq!(
                    config.app.cors_origins,
                    vec!["https://polimoney.example", "https://admin.example"]
                );
            },
        );
    }

    #[test]
    fn test_default_log_filter_follows_env() {
        let development = AppSettings::default();
        assert_eq!(
            development.default_log_filter(),
            "polimoney=debug,tower_http=debug"
        );

        let production = AppSettings {
            env: "Production".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(
            production.default_log_filter(),
            "polimoney=warn,tower_http=warn"
        );
    }

    #[test]
    fn test_missing_database_url_fails() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test-none")),
                ("POLIMONEY__DATABASE__URL", None::<&str>),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }
}
