use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_address: String,
    /// Directory holding the document store
    pub data_dir: String,
    /// Title interpolated into preview pages
    pub site_name: String,
    /// Upper bound on the startup catalogue load (seconds). Exceeding it is
    /// a fatal startup error; the process never serves a partial catalogue.
    pub load_timeout_secs: u64,
    /// Gzip-compress every payload once at load time
    pub precompress: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let site_name = std::env::var("SITE_NAME").unwrap_or_else(|_| "Image Server".to_string());

        let load_timeout_secs = std::env::var("CATALOGUE_LOAD_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(20);

        let precompress = std::env::var("PRECOMPRESS_PAYLOADS")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        let config = Config {
            bind_address,
            data_dir,
            site_name,
            load_timeout_secs,
            precompress,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "SITE_NAME cannot be empty".to_string(),
            ));
        }

        if self.load_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "CATALOGUE_LOAD_TIMEOUT must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
