use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for sellerdesk
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SellerdeskConfig {
    /// Backend API settings
    pub api: ApiConfig,
    /// Console presentation settings
    pub ui: UiConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the seller-onboarding backend
    pub base_url: String,
    /// Bearer token (can be set via env var)
    pub token: Option<String>,
    /// Account id of the logged-in user, used to establish the session
    pub user_id: Option<u64>,
    /// Per-request timeout
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Default page size for the moderation queue
    pub page_size: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON logs instead of human-readable ones
    pub json_logs: bool,
}

impl Default for SellerdeskConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080/api".to_string(),
                token: None, // Will be read from env var or sellerdesk.toml
                user_id: None,
                timeout_seconds: 30,
            },
            ui: UiConfig { page_size: 10 },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: false,
            },
        }
    }
}

impl SellerdeskConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. Configuration files (sellerdesk.toml, .sellerdesk-rc)
    /// 3. Environment variables (prefixed with SELLERDESK_)
    pub fn load() -> Result<Self> {
        let defaults = Config::try_from(&SellerdeskConfig::default())?;
        let mut builder = Config::builder().add_source(defaults);

        if Path::new("sellerdesk.toml").exists() {
            builder = builder.add_source(File::with_name("sellerdesk"));
        }

        if Path::new(".sellerdesk-rc").exists() {
            builder = builder.add_source(File::with_name(".sellerdesk-rc"));
        }

        builder = builder.add_source(
            Environment::with_prefix("SELLERDESK")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut sellerdesk_config: SellerdeskConfig = config.try_deserialize()?;

        // Multi-segment keys don't survive the env separator; resolve them
        // by hand the way the token is resolved.
        if let Ok(url) = std::env::var("SELLERDESK_API_URL") {
            if !url.is_empty() {
                sellerdesk_config.api.base_url = url;
            }
        }
        if sellerdesk_config.api.token.is_none() {
            if let Ok(token) = std::env::var("SELLERDESK_API_TOKEN") {
                if !token.is_empty() {
                    sellerdesk_config.api.token = Some(token);
                }
            }
        }
        if sellerdesk_config.api.user_id.is_none() {
            if let Ok(id) = std::env::var("SELLERDESK_USER_ID") {
                sellerdesk_config.api.user_id = id.parse().ok();
            }
        }

        Ok(sellerdesk_config)
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<SellerdeskConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        // Load .env file first
        let _ = SellerdeskConfig::load_env_file();
        SellerdeskConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static SellerdeskConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let cfg = SellerdeskConfig::default();
        assert_eq!(cfg.ui.page_size, 10);
        assert_eq!(cfg.api.timeout_seconds, 30);
        assert!(cfg.api.token.is_none());
    }
}
