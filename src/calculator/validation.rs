use crate::domain::errors::InputError;

/// Parses a user-entered USD price.
///
/// Accepts `14.99`, `14,99` and `1.234,56` (es-AR grouping).
pub fn parse_usd_price(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value = normalize_decimal(trimmed)
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(InputError::NotANumber(trimmed.to_string()));
    }
    check_usd_price(value)
}

/// Rejects prices that are not strictly positive
pub fn check_usd_price(value: f64) -> Result<f64, InputError> {
    if value.is_nan() {
        Err(InputError::NotANumber(value.to_string()))
    } else if value <= 0.0 {
        Err(InputError::NotPositive(value))
    } else {
        Ok(value)
    }
}

fn normalize_decimal(input: &str) -> String {
    if input.contains(',') {
        input.replace('.', "").replace(',', ".")
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_decimal_point_and_comma() {
        assert_eq!(parse_usd_price("14.99"), Ok(14.99));
        assert_eq!(parse_usd_price("  14,99 "), Ok(14.99));
        assert_eq!(parse_usd_price("1.234,56"), Ok(1234.56));
        assert_eq!(parse_usd_price("60"), Ok(60.0));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(parse_usd_price(""), Err(InputError::Empty));
        assert_eq!(parse_usd_price("   "), Err(InputError::Empty));
    }

    #[test]
    fn test_rejects_non_numeric() {
        for input in ["abc", "14.99usd", "1,2,3", "NaN", "inf"] {
            assert_eq!(
                parse_usd_price(input),
                Err(InputError::NotANumber(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(parse_usd_price("0"), Err(InputError::NotPositive(0.0)));
        assert_eq!(parse_usd_price("-5"), Err(InputError::NotPositive(-5.0)));
        assert_eq!(check_usd_price(-0.01), Err(InputError::NotPositive(-0.01)));
    }
}
