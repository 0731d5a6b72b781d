use chrono::DateTime;
use serde_json::Value;

use crate::domain::enums::RateKind;
use crate::domain::errors::FetchError;
use crate::domain::model::rate::{ExchangeRate, RateQuote};

/// Parses dolarapi.com response bodies
pub struct DolarApiParser;

impl DolarApiParser {
    /// Parses one quote document, e.g.
    /// `{"casa":"cripto","compra":1290.5,"venta":1310.2,"fechaActualizacion":"..."}`.
    /// Only `venta` is required, and it must be a positive number.
    pub fn parse_quote(kind: RateKind, data: &Value) -> Result<RateQuote, FetchError> {
        let venta = data
            .get("venta")
            .filter(|v| !v.is_null())
            .ok_or_else(|| invalid(kind, "missing venta field".to_string()))?;

        let value = venta
            .as_f64()
            .ok_or_else(|| invalid(kind, format!("venta is not a number: {}", venta)))?;

        let sell = ExchangeRate::new(value)
            .ok_or_else(|| invalid(kind, format!("venta must be positive, got {}", value)))?;

        let buy = data.get("compra").and_then(|v| v.as_f64());

        // Informational, so an unparsable timestamp is dropped rather than rejected
        let updated_at = data
            .get("fechaActualizacion")
            .and_then(|v| v.as_str())
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok());

        Ok(RateQuote {
            kind,
            sell,
            buy,
            updated_at,
        })
    }
}

fn invalid(kind: RateKind, reason: String) -> FetchError {
    FetchError::InvalidResponse { kind, reason }
}
