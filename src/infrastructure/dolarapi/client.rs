use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config_loader::RateServiceConfig;
use crate::domain::enums::RateKind;
use crate::domain::errors::FetchError;
use crate::domain::model::rate::RateQuote;
use crate::domain::traits::RateProvider;

use super::parsers::DolarApiParser;

/// HTTP client for the dolarapi.com quote endpoints
#[derive(Debug, Clone)]
pub struct DolarApiClient {
    http: Client,
    crypto_url: Url,
    card_url: Url,
}

impl DolarApiClient {
    pub fn new(config: &RateServiceConfig, timeout: Option<Duration>) -> Result<Self> {
        let base = normalize_base(&config.base_url)?;

        let crypto_url = base
            .join(config.crypto_path.trim_start_matches('/'))
            .map_err(|e| anyhow!("Invalid crypto path '{}': {}", config.crypto_path, e))?;
        let card_url = base
            .join(config.card_path.trim_start_matches('/'))
            .map_err(|e| anyhow!("Invalid card path '{}': {}", config.card_path, e))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        debug!("Rate endpoints: crypto={}, card={}", crypto_url, card_url);

        Ok(Self {
            http,
            crypto_url,
            card_url,
        })
    }

    /// Client against an arbitrary base URL with the default paths
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let config = RateServiceConfig {
            base_url: base_url.to_string(),
            ..RateServiceConfig::default()
        };
        Self::new(&config, None)
    }

    pub fn endpoint(&self, kind: RateKind) -> &Url {
        match kind {
            RateKind::Crypto => &self.crypto_url,
            RateKind::Card => &self.card_url,
        }
    }
}

#[async_trait]
impl RateProvider for DolarApiClient {
    async fn fetch_quote(&self, kind: RateKind) -> Result<RateQuote, FetchError> {
        let url = self.endpoint(kind);
        debug!("Fetching {} rate from {}", kind, url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Network { kind, source })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Rate service returned {} for {} quote", status, kind);
            return Err(FetchError::Unavailable {
                kind,
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(|e| FetchError::InvalidResponse {
            kind,
            reason: format!("body is not valid JSON: {}", e),
        })?;
        debug!("Raw {} quote: {}", kind, body);

        let quote = DolarApiParser::parse_quote(kind, &body)?;
        info!("Fetched {} rate: {}", kind, quote.sell);

        Ok(quote)
    }
}

// Url::join replaces the last segment unless the base ends with '/'
fn normalize_base(base_url: &str) -> Result<Url> {
    let mut base = Url::parse(base_url.trim())
        .map_err(|e| anyhow!("Invalid rate service URL '{}': {}", base_url, e))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}
