//! Pricing engine and calculator session.
//!
//! `engine` holds the pure arithmetic, `profile` maps a rate source and its
//! markups onto the engine, and `session` ties both to a rate provider and
//! user input.

pub mod engine;
mod profile;
mod session;
pub mod validation;

pub use engine::{compute_quote, compute_quote_with_step, round_to_step};
pub use profile::PricingProfile;
pub use session::{PriceCalculator, RateState};
pub use validation::parse_usd_price;
