use thiserror::Error;

use crate::domain::enums::RateKind;

/// Failure to obtain a rate from the quote service. Never defaulted.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("rate service unavailable: {kind} quote returned HTTP {status}")]
    Unavailable { kind: RateKind, status: u16 },

    #[error("invalid rate response for {kind} quote: {reason}")]
    InvalidResponse { kind: RateKind, reason: String },

    #[error("could not reach rate service for {kind} quote: {source}")]
    Network {
        kind: RateKind,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn kind(&self) -> RateKind {
        match self {
            FetchError::Unavailable { kind, .. }
            | FetchError::InvalidResponse { kind, .. }
            | FetchError::Network { kind, .. } => *kind,
        }
    }
}

/// Rejected user input for the USD price.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("please enter a price in dollars")]
    Empty,

    #[error("please enter a valid price ('{0}' is not a number)")]
    NotANumber(String),

    #[error("please enter a valid price (it must be greater than zero, got {0})")]
    NotPositive(f64),

    #[error("please enter a smaller price (it is too large to convert to pesos)")]
    TooLarge(f64),
}

/// Everything a single submission can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("the dollar rate is not available yet, please wait a moment")]
    RateNotReady,

    #[error("{0}")]
    RateUnavailable(String),
}

impl From<FetchError> for CalculatorError {
    fn from(err: FetchError) -> Self {
        CalculatorError::RateUnavailable(err.to_string())
    }
}
