use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use larder_spoonacular::{ClientConfig, DEFAULT_BASE_URL};
use serde::Deserialize;
use std::{env, path::PathBuf, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub key: String,
    /// Random, category, favorites and meal plan lookups
    pub short_timeout_secs: u64,
    /// Ingredient search, shopping list lookups and recipe detail
    pub long_timeout_secs: u64,
}

impl ApiConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.to_owned(),
            api_key: self.key.to_owned(),
            short_timeout: Duration::from_secs(self.short_timeout_secs),
            long_timeout: Duration::from_secs(self.long_timeout_secs),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding the JSON state files
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (LARDER__API__KEY, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.key", "")?
            .set_default("api.short_timeout_secs", 10)?
            .set_default("api.long_timeout_secs", 15)?
            .set_default("data.dir", ".")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("LARDER")
                .separator("__")
                .try_parsing(true),
        );

        // Variable name the recipe API documentation tells users to set
        if let Ok(api_key) = env::var("SPOONACULAR_API_KEY") {
            builder = builder.set_override("api.key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.trim().is_empty() {
            return Err("API base_url must not be empty".to_string());
        }
        if self.api.short_timeout_secs == 0 || self.api.long_timeout_secs == 0 {
            return Err("API timeouts must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                key: String::new(),
                short_timeout_secs: 10,
                long_timeout_secs: 15,
            },
            data: DataConfig { dir: ".".into() },
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let mut config = config();
        config.api.base_url = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = config();
        config.api.short_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = self::config();
        config.api.long_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_config_timeouts() {
        let client = config().api.client_config();

        assert_eq!(client.short_timeout, Duration::from_secs(10));
        assert_eq!(client.long_timeout, Duration::from_secs(15));
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
