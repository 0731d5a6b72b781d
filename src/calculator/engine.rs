use crate::domain::constants::ROUNDING_STEP;
use crate::domain::model::quote::PriceQuote;
use crate::domain::model::rate::ExchangeRate;

/// Rounds to the nearest multiple of `step`, halves away from zero.
pub fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Prices `usd_price` at `rate` with `markup`, rounding the sale price to a
/// multiple of 5 pesos.
///
/// `usd_price` is expected to be positive; callers validate it first.
pub fn compute_quote(usd_price: f64, rate: ExchangeRate, markup: f64) -> PriceQuote {
    compute_quote_with_step(usd_price, rate, markup, ROUNDING_STEP)
}

pub fn compute_quote_with_step(
    usd_price: f64,
    rate: ExchangeRate,
    markup: f64,
    step: f64,
) -> PriceQuote {
    let base_ars = usd_price * rate.value();
    let final_ars = round_to_step(base_ars * markup, step);

    PriceQuote {
        usd_price,
        rate,
        markup,
        base_ars,
        final_ars,
        profit: final_ars - base_ars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn rate(value: f64) -> ExchangeRate {
        ExchangeRate::new(value).unwrap()
    }

    #[test]
    fn test_transfer_price_example() {
        let quote = compute_quote(14.99, rate(1000.0), 1.10);

        assert!((quote.base_ars - 14990.0).abs() < EPSILON);
        assert_eq!(quote.final_ars, 16490.0);
        assert!((quote.profit - 1500.0).abs() < EPSILON);
    }

    #[test]
    fn test_card_price_rounds_down() {
        // 77987 * 1.05 = 81886.35 -> 16377.27 steps -> 16377
        let quote = compute_quote(59.99, rate(1300.0), 1.05);

        assert!((quote.base_ars - 77987.0).abs() < EPSILON);
        assert_eq!(quote.final_ars, 81885.0);
        assert!((quote.profit - 3898.0).abs() < EPSILON);
    }

    #[test]
    fn test_half_steps_round_away_from_zero() {
        assert_eq!(round_to_step(12.5, 5.0), 15.0);
        assert_eq!(round_to_step(7.5, 5.0), 10.0);
        assert_eq!(round_to_step(7.49, 5.0), 5.0);
        assert_eq!(round_to_step(102.0, 10.0), 100.0);
    }

    #[test]
    fn test_compute_quote_is_deterministic() {
        let first = compute_quote(23.45, rate(1287.3), 1.10);
        let second = compute_quote(23.45, rate(1287.3), 1.10);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_step() {
        let quote = compute_quote_with_step(10.0, rate(1234.0), 1.10, 100.0);
        // 13574 -> 13600
        assert_eq!(quote.final_ars, 13600.0);
    }
}
