use std::time::Duration;

use log::{debug, error, info};
use tokio::sync::RwLock;

use crate::domain::errors::{CalculatorError, FetchError};
use crate::domain::model::quote::Calculation;
use crate::domain::model::rate::Rates;
use crate::domain::traits::RateProvider;

use super::profile::PricingProfile;
use super::validation::{check_usd_price, parse_usd_price};

/// Where a calculator is in acquiring its rates
#[derive(Clone, Debug, PartialEq)]
pub enum RateState {
    Loading,
    Ready(Rates),
    /// Holds the user-facing failure message
    Failed(String),
}

/// One calculator session: rates are loaded once, then any number of prices
/// are submitted against them.
pub struct PriceCalculator {
    profile: PricingProfile,
    display_delay: Duration,
    rates: RwLock<RateState>,
}

impl PriceCalculator {
    pub fn new(profile: PricingProfile, display_delay: Duration) -> Self {
        Self {
            profile,
            display_delay,
            rates: RwLock::new(RateState::Loading),
        }
    }

    pub fn profile(&self) -> &PricingProfile {
        &self.profile
    }

    pub async fn rate_state(&self) -> RateState {
        self.rates.read().await.clone()
    }

    /// Fetches the rates the profile needs and records the outcome.
    /// A failure is kept so later submissions report it.
    pub async fn load_rates<P>(&self, provider: &P) -> Result<Rates, FetchError>
    where
        P: RateProvider + ?Sized,
    {
        *self.rates.write().await = RateState::Loading;
        debug!("Loading {} rates", self.profile.source);

        match provider.fetch_rates(self.profile.source).await {
            Ok(rates) => {
                info!("Rates ready for {} profile", self.profile.source);
                *self.rates.write().await = RateState::Ready(rates.clone());
                Ok(rates)
            }
            Err(e) => {
                error!("Failed to load rates: {}", e);
                *self.rates.write().await = RateState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Validates raw input and prices it
    pub async fn calculate(&self, input: &str) -> Result<Calculation, CalculatorError> {
        let usd_price = parse_usd_price(input)?;
        self.calculate_price(usd_price).await
    }

    pub async fn calculate_price(&self, usd_price: f64) -> Result<Calculation, CalculatorError> {
        let usd_price = check_usd_price(usd_price)?;

        let rates = match &*self.rates.read().await {
            RateState::Ready(rates) => rates.clone(),
            RateState::Loading => return Err(CalculatorError::RateNotReady),
            RateState::Failed(message) => {
                return Err(CalculatorError::RateUnavailable(message.clone()))
            }
        };

        if !self.display_delay.is_zero() {
            tokio::time::sleep(self.display_delay).await;
        }

        let calculation = self.profile.price(usd_price, &rates)?;
        debug!("Priced USD {} into {} leg(s)", usd_price, calculation.legs.len());
        Ok(calculation)
    }
}
