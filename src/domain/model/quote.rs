// Domain model for priced results
use serde::Serialize;

use crate::domain::enums::RateKind;
use crate::domain::model::rate::ExchangeRate;

/// Sale price for one USD amount at one rate and markup
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PriceQuote {
    pub usd_price: f64,
    pub rate: ExchangeRate,
    pub markup: f64,
    /// Cost in pesos before markup
    pub base_ars: f64,
    /// Marked-up price, always a multiple of the rounding step
    pub final_ars: f64,
    pub profit: f64,
}

/// A quote tagged with the rate kind it was priced against
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PricedLeg {
    pub kind: RateKind,
    pub quote: PriceQuote,
}

/// Result of one submission: the same USD price priced against every rate
/// the calculator's profile uses.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Calculation {
    pub usd_price: f64,
    pub legs: Vec<PricedLeg>,
}

impl Calculation {
    pub fn leg(&self, kind: RateKind) -> Option<&PricedLeg> {
        self.legs.iter().find(|leg| leg.kind == kind)
    }

    /// The leg shown as the headline price
    pub fn primary(&self) -> Option<&PricedLeg> {
        self.legs.first()
    }
}
