use serde::Serialize;

use crate::domain::constants::*;
use crate::domain::enums::{RateKind, RateSource};
use crate::domain::errors::{CalculatorError, InputError};
use crate::domain::model::quote::{Calculation, PricedLeg};
use crate::domain::model::rate::Rates;

use super::engine::compute_quote_with_step;

/// Which rates a calculator prices against and with which markups.
///
/// The buyer-facing transfer calculator is `source = crypto`; the dual
/// calculator prices the same USD amount against both the crypto rate
/// (transfer price) and the card rate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PricingProfile {
    pub source: RateSource,
    pub crypto_markup: f64,
    pub card_markup: f64,
    pub rounding_step: f64,
}

impl Default for PricingProfile {
    fn default() -> Self {
        Self::transfer()
    }
}

impl PricingProfile {
    pub fn for_source(source: RateSource) -> Self {
        Self {
            source,
            crypto_markup: TRANSFER_MARKUP,
            card_markup: CARD_MARKUP,
            rounding_step: ROUNDING_STEP,
        }
    }

    pub fn transfer() -> Self {
        Self::for_source(RateSource::Crypto)
    }

    pub fn dual() -> Self {
        Self::for_source(RateSource::Both)
    }

    pub fn markup_for(&self, kind: RateKind) -> f64 {
        match kind {
            RateKind::Crypto => self.crypto_markup,
            RateKind::Card => self.card_markup,
        }
    }

    /// Prices `usd_price` against every rate this profile uses.
    /// Fails with `RateNotReady` if `rates` lacks one of them, and with
    /// `TooLarge` if a sale price would exceed `MAX_ARS_PRICE`.
    pub fn price(&self, usd_price: f64, rates: &Rates) -> Result<Calculation, CalculatorError> {
        let legs = self
            .source
            .kinds()
            .iter()
            .map(|&kind| -> Result<PricedLeg, CalculatorError> {
                let rate = rates.get(kind).ok_or(CalculatorError::RateNotReady)?.sell;
                let quote = compute_quote_with_step(
                    usd_price,
                    rate,
                    self.markup_for(kind),
                    self.rounding_step,
                );
                if !quote.final_ars.is_finite() || quote.final_ars > MAX_ARS_PRICE {
                    return Err(InputError::TooLarge(usd_price).into());
                }
                Ok(PricedLeg { kind, quote })
            })
            .collect::<Result<Vec<_>, CalculatorError>>()?;

        Ok(Calculation { usd_price, legs })
    }
}
