// Domain model for exchange rates (ARS per 1 USD)
use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::domain::enums::RateKind;

/// A positive, finite amount of pesos per dollar.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    /// Returns `None` for zero, negative, NaN or infinite values
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value > 0.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Crypto and card rates fetched together. Only exists when both succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExchangeRatePair {
    pub crypto: ExchangeRate,
    pub card: ExchangeRate,
}

impl ExchangeRatePair {
    pub fn get(&self, kind: RateKind) -> ExchangeRate {
        match kind {
            RateKind::Crypto => self.crypto,
            RateKind::Card => self.card,
        }
    }
}

/// One published quote as returned by the rate service
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RateQuote {
    pub kind: RateKind,
    /// `venta`, the rate used for pricing
    pub sell: ExchangeRate,
    /// `compra`, informational only
    pub buy: Option<f64>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl RateQuote {
    pub fn new(kind: RateKind, sell: ExchangeRate) -> Self {
        Self {
            kind,
            sell,
            buy: None,
            updated_at: None,
        }
    }
}

/// Rates held by a calculator once loading finished.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rates {
    Single(RateQuote),
    Pair { crypto: RateQuote, card: RateQuote },
}

impl Rates {
    pub fn get(&self, kind: RateKind) -> Option<&RateQuote> {
        match self {
            Rates::Single(quote) if quote.kind == kind => Some(quote),
            Rates::Single(_) => None,
            Rates::Pair { crypto, .. } if kind == RateKind::Crypto => Some(crypto),
            Rates::Pair { card, .. } => Some(card),
        }
    }

    pub fn quotes(&self) -> Vec<&RateQuote> {
        match self {
            Rates::Single(quote) => vec![quote],
            Rates::Pair { crypto, card } => vec![crypto, card],
        }
    }

    pub fn pair(&self) -> Option<ExchangeRatePair> {
        match self {
            Rates::Pair { crypto, card } => Some(ExchangeRatePair {
                crypto: crypto.sell,
                card: card.sell,
            }),
            Rates::Single(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_rate_rejects_non_positive() {
        assert!(ExchangeRate::new(0.0).is_none());
        assert!(ExchangeRate::new(-1200.0).is_none());
        assert!(ExchangeRate::new(f64::NAN).is_none());
        assert!(ExchangeRate::new(f64::INFINITY).is_none());
        assert_eq!(ExchangeRate::new(1250.5).map(ExchangeRate::value), Some(1250.5));
    }

    #[test]
    fn test_rates_lookup() {
        let crypto = RateQuote::new(RateKind::Crypto, ExchangeRate::new(1300.0).unwrap());
        let card = RateQuote::new(RateKind::Card, ExchangeRate::new(1450.0).unwrap());

        let single = Rates::Single(crypto.clone());
        assert_eq!(single.get(RateKind::Crypto), Some(&crypto));
        assert_eq!(single.get(RateKind::Card), None);
        assert!(single.pair().is_none());

        let pair = Rates::Pair { crypto, card };
        assert_eq!(pair.get(RateKind::Card).map(|q| q.sell.value()), Some(1450.0));
        assert_eq!(pair.pair().map(|p| p.get(RateKind::Crypto).value()), Some(1300.0));
        assert_eq!(pair.quotes().len(), 2);
    }
}
