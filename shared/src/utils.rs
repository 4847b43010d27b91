// Lenient numeric coercion for values typed into the contract form.
// Anything that is not a usable non-negative number becomes zero.
use serde_json::Value;

pub mod brazilian_format {
    use anyhow::{anyhow, Result};
    use std::str::FromStr;

    // Parses "1.234,56", "27,50" or plain "27.5" into f64.
    // A comma marks the Brazilian layout, where '.' is a thousand separator.
    pub fn parse_decimal(s: &str) -> Result<f64> {
        let trimmed = s.trim();
        let normalized = if trimmed.contains(',') {
            trimmed.replace('.', "").replace(',', ".")
        } else {
            trimmed.to_string()
        };

        f64::from_str(&normalized).map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
    }

}

fn sanitize_price(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

pub fn coerce_price(raw: &str) -> f64 {
    brazilian_format::parse_decimal(raw).map(sanitize_price).unwrap_or(0.0)
}

// Counts keep only the integer part, like parseInt on the form input.
pub fn coerce_count(raw: &str) -> u32 {
    brazilian_format::parse_decimal(raw)
        .map(count_from_f64)
        .unwrap_or(0)
}

fn count_from_f64(value: f64) -> u32 {
    let value = sanitize_price(value).trunc();
    if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value as u32
    }
}

pub fn coerce_price_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().map(sanitize_price).unwrap_or(0.0),
        Value::String(s) => coerce_price(s),
        _ => 0.0,
    }
}

pub fn coerce_count_value(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n.as_f64().map(count_from_f64).unwrap_or(0),
        Value::String(s) => coerce_count(s),
        _ => 0,
    }
}
