use std::fmt::Write;

use crate::domain::enums::RateKind;
use crate::domain::model::quote::{Calculation, PricedLeg};
use crate::domain::model::rate::Rates;

use super::format::{format_ars, format_usd};

fn payment_method(kind: RateKind) -> &'static str {
    match kind {
        RateKind::Crypto => "bank transfer",
        RateKind::Card => "card",
    }
}

fn markup_percent(markup: f64) -> String {
    format!("{:.0}%", (markup - 1.0) * 100.0)
}

fn signed_ars(value: f64) -> String {
    if value < 0.0 {
        format!("- {}", format_ars(-value))
    } else {
        format!("+ {}", format_ars(value))
    }
}

/// Buyer-facing view: only what the customer pays
pub fn public_view(calculation: &Calculation) -> String {
    let mut out = String::new();

    for leg in &calculation.legs {
        let _ = writeln!(
            out,
            "Final price ({}): {}",
            payment_method(leg.kind),
            format_ars(leg.quote.final_ars)
        );
    }

    // The transfer-only calculator tells buyers about the card surcharge
    if calculation.legs.len() == 1
        && calculation.primary().map(|leg| leg.kind) == Some(RateKind::Crypto)
    {
        out.push_str(
            "This is the final price paying by bank transfer. Paying by card has a surcharge.\n",
        );
    }
    out
}

/// Seller-facing view: cost, rate and profit breakdown per leg
pub fn admin_view(calculation: &Calculation, rates: Option<&Rates>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24}{}",
        "Entered price (USD)",
        format_usd(calculation.usd_price)
    );

    for leg in &calculation.legs {
        out.push('\n');
        write_admin_leg(&mut out, leg, rates);
    }
    out
}

fn write_admin_leg(out: &mut String, leg: &PricedLeg, rates: Option<&Rates>) {
    let quote = &leg.quote;

    let _ = writeln!(out, "{:<24}{}", leg.kind.label(), format_ars(quote.rate.value()));
    if let Some(updated_at) = rates
        .and_then(|r| r.get(leg.kind))
        .and_then(|q| q.updated_at)
    {
        let _ = writeln!(out, "{:<24}{}", "Rate updated", updated_at.format("%Y-%m-%d %H:%M %:z"));
    }
    let _ = writeln!(out, "{:<24}{}", "Base price (cost)", format_ars(quote.base_ars));
    let _ = writeln!(
        out,
        "{:<24}{}",
        format!("Your profit ({})", markup_percent(quote.markup)),
        signed_ars(quote.profit)
    );
    let _ = writeln!(
        out,
        "{:<24}{}",
        format!("Sale price ({})", payment_method(leg.kind)),
        format_ars(quote.final_ars)
    );
}

/// Current rates, one line per quote
pub fn rates_view(rates: &Rates) -> String {
    let mut out = String::new();
    for quote in rates.quotes() {
        let _ = write!(out, "{:<16}sell {}", quote.kind.label(), format_ars(quote.sell.value()));
        if let Some(buy) = quote.buy {
            let _ = write!(out, "  buy {}", format_ars(buy));
        }
        if let Some(updated_at) = quote.updated_at {
            let _ = write!(out, "  ({})", updated_at.format("%Y-%m-%d %H:%M %:z"));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::PricingProfile;
    use crate::domain::model::rate::{ExchangeRate, RateQuote};

    fn quote(kind: RateKind, value: f64) -> RateQuote {
        RateQuote::new(kind, ExchangeRate::new(value).unwrap())
    }

    #[test]
    fn test_public_view_transfer() {
        let rates = Rates::Single(quote(RateKind::Crypto, 1000.0));
        let calculation = PricingProfile::transfer().price(14.99, &rates).unwrap();

        let view = public_view(&calculation);

        assert!(view.starts_with("Final price (bank transfer): $ 16.490,00\n"));
        assert!(view.contains("Paying by card has a surcharge."));
        assert!(!view.contains('%'));
    }

    #[test]
    fn test_public_view_dual_lists_both_prices() {
        let rates = Rates::Pair {
            crypto: quote(RateKind::Crypto, 1000.0),
            card: quote(RateKind::Card, 1300.0),
        };
        let calculation = PricingProfile::dual().price(59.99, &rates).unwrap();

        let view = public_view(&calculation);

        assert!(view.contains("Final price (card): $ 81.885,00"));
        assert!(!view.contains("surcharge"));
    }

    #[test]
    fn test_admin_view_breakdown() {
        let rates = Rates::Single(quote(RateKind::Crypto, 1000.0));
        let calculation = PricingProfile::transfer().price(14.99, &rates).unwrap();

        let view = admin_view(&calculation, Some(&rates));

        assert!(view.contains("US$ 14,99"));
        assert!(view.contains("Crypto dollar"));
        assert!(view.contains("$ 1.000,00"));
        assert!(view.contains("$ 14.990,00"));
        assert!(view.contains("Your profit (10%)"));
        assert!(view.contains("+ $ 1.500,00"));
        assert!(view.contains("$ 16.490,00"));
    }

    #[test]
    fn test_admin_view_shows_rounding_loss_as_negative() {
        // 1 ARS of cost at 10% is 1,10, which rounds down to 0
        let rates = Rates::Single(quote(RateKind::Crypto, 1000.0));
        let calculation = PricingProfile::transfer().price(0.001, &rates).unwrap();

        let view = admin_view(&calculation, Some(&rates));

        assert!(view.contains("- $ 1,00"), "{}", view);
        assert!(!view.contains("+ -"));
    }

    #[test]
    fn test_rates_view() {
        let mut crypto = quote(RateKind::Crypto, 1310.25);
        crypto.buy = Some(1290.5);
        let rates = Rates::Single(crypto);

        let view = rates_view(&rates);

        assert!(view.contains("sell $ 1.310,25"));
        assert!(view.contains("buy $ 1.290,50"));
    }
}
