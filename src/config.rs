use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: CATALOG_)
            .add_source(
                config::Environment::with_prefix("CATALOG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

/// Search pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Records per page when a request carries no usable per_page value
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_per_page: default_per_page(),
        }
    }
}

// Default value functions
fn default_per_page() -> u32 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        assert_eq!(default_per_page(), 15);
        assert_eq!(SearchConfig::default().default_per_page, 15);
    }

    #[test]
    fn test_load_embedded_defaults() {
        let config = Config::load().unwrap();
        assert_eq!(config.search.default_per_page, 15);
    }
}
