use async_trait::async_trait;
use futures_util::future::try_join;

use crate::domain::enums::{RateKind, RateSource};
use crate::domain::errors::FetchError;
use crate::domain::model::rate::{ExchangeRate, ExchangeRatePair, RateQuote, Rates};

/// Source of USD/ARS quotes. Every call is a single attempt.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_quote(&self, kind: RateKind) -> Result<RateQuote, FetchError>;

    async fn fetch_rate(&self, kind: RateKind) -> Result<ExchangeRate, FetchError> {
        Ok(self.fetch_quote(kind).await?.sell)
    }

    /// Fetches both rates concurrently. Fails as a whole if either fails.
    async fn fetch_pair(&self) -> Result<ExchangeRatePair, FetchError> {
        let (crypto, card) = try_join(
            self.fetch_rate(RateKind::Crypto),
            self.fetch_rate(RateKind::Card),
        )
        .await?;
        Ok(ExchangeRatePair { crypto, card })
    }

    async fn fetch_rates(&self, source: RateSource) -> Result<Rates, FetchError> {
        match source {
            RateSource::Crypto => Ok(Rates::Single(self.fetch_quote(RateKind::Crypto).await?)),
            RateSource::Card => Ok(Rates::Single(self.fetch_quote(RateKind::Card).await?)),
            RateSource::Both => {
                let (crypto, card) = try_join(
                    self.fetch_quote(RateKind::Crypto),
                    self.fetch_quote(RateKind::Card),
                )
                .await?;
                Ok(Rates::Pair { crypto, card })
            }
        }
    }
}
