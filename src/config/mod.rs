//! Configuration management
//!
//! The only deployment setting that matters is the API base URL. It has no
//! default: an unset value is a startup error, never a fallback host.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Environment variable carrying the API base URL.
///
/// Browser builds read it at compile time; native builds read it at runtime
/// through the `config` crate (prefix `CAMPAIGN_CONSOLE`).
pub const BASE_URL_ENV: &str = "CAMPAIGN_CONSOLE_API_BASE_URL";

/// Config file name (without extension) looked up by native builds.
pub const CONFIG_FILE: &str = "campaign-console";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API base URL is not configured (set CAMPAIGN_CONSOLE_API_BASE_URL)")]
    MissingBaseUrl,

    #[error("API base URL {value:?} is invalid: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to load configuration: {0}")]
    Source(#[from] ::config::ConfigError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_base_url: String,

    #[serde(default = "default_token_storage_key")]
    pub token_storage_key: String,
}

fn default_token_storage_key() -> String {
    "token".to_string()
}

impl ClientConfig {
    /// Build a validated config for the given base URL.
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        Self {
            api_base_url: api_base_url.to_string(),
            token_storage_key: default_token_storage_key(),
        }
        .validated()
    }

    /// Read the base URL baked in at build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match option_env!("CAMPAIGN_CONSOLE_API_BASE_URL") {
            Some(value) => Self::new(value),
            None => Err(ConfigError::MissingBaseUrl),
        }
    }

    /// Normalize and check the base URL.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            value: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                value: trimmed.to_string(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }
        if parsed.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl {
                value: trimmed.to_string(),
                reason: "missing host".to_string(),
            });
        }

        self.api_base_url = trimmed.to_string();
        if self.token_storage_key.trim().is_empty() {
            self.token_storage_key = default_token_storage_key();
        }
        Ok(self)
    }

    /// Absolute URL for an API path such as `/campaign/create`.
    ///
    /// Plain concatenation: the base may carry a path prefix (`/api`) that
    /// `Url::join` would drop for absolute paths.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

/// Load configuration from `campaign-console.*` (optional) and
/// `CAMPAIGN_CONSOLE_*` environment variables.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    load_config_from(CONFIG_FILE)
}

/// Same as [`load_config`] with an explicit config file stem.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config_from(file_stem: &str) -> Result<ClientConfig, ConfigError> {
    let config = ::config::Config::builder()
        .set_default("token_storage_key", default_token_storage_key())?
        // Load from config file if it exists
        .add_source(::config::File::with_name(file_stem).required(false))
        // Override with environment variables (CAMPAIGN_CONSOLE_API_BASE_URL, ...)
        .add_source(
            ::config::Environment::with_prefix("CAMPAIGN_CONSOLE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: ClientConfig = config.try_deserialize()?;
    config.validated()
}

/// Resolve the configuration for the current target.
pub fn resolve() -> Result<ClientConfig, ConfigError> {
    #[cfg(target_arch = "wasm32")]
    {
        ClientConfig::from_build_env()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ClientConfig::new("https://api.example.com/api/").unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com/api");
        assert_eq!(config.token_storage_key, "token");
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let config = ClientConfig::new("https://api.example.com/api").unwrap();
        assert_eq!(
            config.endpoint("/campaign/create"),
            "https://api.example.com/api/campaign/create"
        );
        assert_eq!(
            config.endpoint("login"),
            "https://api.example.com/api/login"
        );
    }

    #[test]
    fn test_empty_base_url_is_missing() {
        assert!(matches!(
            ClientConfig::new("   "),
            Err(ConfigError::MissingBaseUrl)
        ));
    }

    #[test]
    fn test_malformed_base_url_rejected() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://files.example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_load_config_without_base_url_fails() {
        std::env::remove_var(BASE_URL_ENV);
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("absent");

        let result = load_config_from(&stem.to_string_lossy());
        assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
    }

    #[test]
    #[serial]
    fn test_load_config_reads_environment() {
        std::env::set_var(BASE_URL_ENV, "https://mail.example.com/api");
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("absent");

        let config = load_config_from(&stem.to_string_lossy()).unwrap();
        std::env::remove_var(BASE_URL_ENV);

        assert_eq!(config.api_base_url, "https://mail.example.com/api");
    }

    #[test]
    #[serial]
    fn test_load_config_reads_file() {
        std::env::remove_var(BASE_URL_ENV);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("console.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "api_base_url = \"http://10.0.0.5:8000\"").unwrap();
        writeln!(file, "token_storage_key = \"console-token\"").unwrap();

        let stem = dir.path().join("console");
        let config = load_config_from(&stem.to_string_lossy()).unwrap();

        assert_eq!(config.api_base_url, "http://10.0.0.5:8000");
        assert_eq!(config.token_storage_key, "console-token");
    }
}
