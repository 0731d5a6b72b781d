use anyhow::{anyhow, ensure, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::calculator::PricingProfile;
use crate::domain::constants::*;
use crate::domain::enums::RateSource;

/// Top-level configuration structure containing all config sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub rate_service: RateServiceConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub app: AppInfo,
}

/// Where the dollar quotes come from
#[derive(Debug, Clone, Deserialize)]
pub struct RateServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_crypto_path")]
    pub crypto_path: String,

    #[serde(default = "default_card_path")]
    pub card_path: String,

    /// No timeout unless set
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DOLARAPI_BASE_URL.to_string()
}

fn default_crypto_path() -> String {
    CRYPTO_PATH.to_string()
}

fn default_card_path() -> String {
    CARD_PATH.to_string()
}

impl Default for RateServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            crypto_path: default_crypto_path(),
            card_path: default_card_path(),
            timeout_secs: None,
        }
    }
}

/// Markups and rounding used by the pricing engine
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_transfer_markup")]
    pub transfer_markup: f64,

    #[serde(default = "default_card_markup")]
    pub card_markup: f64,

    #[serde(default = "default_rounding_step")]
    pub rounding_step: f64,
}

fn default_transfer_markup() -> f64 {
    TRANSFER_MARKUP
}

fn default_card_markup() -> f64 {
    CARD_MARKUP
}

fn default_rounding_step() -> f64 {
    ROUNDING_STEP
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            transfer_markup: default_transfer_markup(),
            card_markup: default_card_markup(),
            rounding_step: default_rounding_step(),
        }
    }
}

/// Application information
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
    #[serde(default = "default_display_delay_ms")]
    pub display_delay_ms: u64,

    /// Also read from `default_profile`
    #[serde(default = "default_rate_source", alias = "default_profile")]
    pub default_source: RateSource,
}

fn default_display_delay_ms() -> u64 {
    DISPLAY_DELAY_MS
}

fn default_rate_source() -> RateSource {
    RateSource::Crypto
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            display_delay_ms: default_display_delay_ms(),
            default_source: default_rate_source(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Read the file
        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml(&config_str)
            .map_err(|e| anyhow!("Invalid config file '{}': {}", path.display(), e))?;

        info!("Loaded configuration from {}", path.display());
        debug!("Rate service: {}", config.rate_service.base_url);

        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.rate_service.base_url)
            .map_err(|e| anyhow!("rate_service.base_url is not a valid URL: {}", e))?;
        ensure!(
            !self.rate_service.crypto_path.trim().is_empty()
                && !self.rate_service.card_path.trim().is_empty(),
            "rate_service paths must not be empty"
        );
        ensure!(
            self.pricing.transfer_markup > 1.0 && self.pricing.card_markup > 1.0,
            "pricing markups must be greater than 1.0"
        );
        ensure!(
            self.pricing.rounding_step.is_finite() && self.pricing.rounding_step > 0.0,
            "pricing.rounding_step must be positive"
        );
        Ok(())
    }

    /// Pricing profile for the given rate source, using configured markups
    pub fn profile(&self, source: RateSource) -> PricingProfile {
        PricingProfile {
            source,
            crypto_markup: self.pricing.transfer_markup,
            card_markup: self.pricing.card_markup,
            rounding_step: self.pricing.rounding_step,
        }
    }

    pub fn display_delay(&self) -> Duration {
        Duration::from_millis(self.app.display_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.rate_service.timeout_secs.map(Duration::from_secs)
    }
}
