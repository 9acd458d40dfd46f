use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use crate::core::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    /// Load configuration from defaults, an optional `blog.toml` and
    /// `BLOG_`-prefixed environment variables, in increasing precedence.
    pub fn load() -> AppResult<Self> {
        let settings = Self::defaults()?
            .add_source(File::with_name("blog").required(false))
            .add_source(
                Environment::with_prefix("BLOG")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub(crate) fn defaults() -> AppResult<ConfigBuilder<DefaultState>> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("server.static_dir", "static")?
            .set_default("database.url", "sqlite:./blog.db")?
            .set_default("database.max_connections", 5_i64)?
            .set_default("logging.level", "info")?;

        Ok(builder)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                static_dir: "static".to_string(),
            },
            database: DatabaseConfig {
                url: "sqlite:./blog.db".to_string(),
                max_connections: 5,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults_deserialize() {
        let config: Config = Config::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, "static");
        assert_eq!(config.database.url, "sqlite:./blog.db");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [server]
            port = 9000

            [database]
            url = "sqlite:./other.db"
        "#;

        let config: Config = Config::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite:./other.db");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_load_reads_prefixed_env() {
        std::env::set_var("BLOG_SERVER__PORT", "9123");
        std::env::set_var("BLOG_DATABASE__MAX_CONNECTIONS", "2");

        let config = Config::load();

        std::env::remove_var("BLOG_SERVER__PORT");
        std::env::remove_var("BLOG_DATABASE__MAX_CONNECTIONS");

        let config = config.unwrap();
        assert_eq!(config.server.port, 9123);
        assert_eq!(config.database.max_connections, 2);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_default_matches_builtin_defaults() {
        let built: Config = Config::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        let default = Config::default();

        assert_eq!(built.server.port, default.server.port);
        assert_eq!(built.database.url, default.database.url);
        assert_eq!(built.logging.level, default.logging.level);
    }
}
