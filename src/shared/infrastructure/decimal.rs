/// Fixed-point conversions for NUMERIC columns (ratings, percentages).
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::shared::errors::{AppError, AppResult};

/// Encode `value` for a two-decimal NUMERIC column. Values that would lose
/// precision are rejected, never rounded.
pub fn to_decimal(field: &str, value: f64) -> AppResult<BigDecimal> {
    if !value.is_finite() {
        return Err(AppError::ValidationError(format!(
            "invalid {} conversion: {} is not a finite number",
            field, value
        )));
    }
    let text = format!("{:.2}", value);
    let rounded = f64::from_str(&text).map_err(|e| {
        AppError::ValidationError(format!("invalid {} conversion for {}: {}", field, value, e))
    })?;
    if rounded != value {
        return Err(AppError::ValidationError(format!(
            "invalid {} conversion: {} does not fit two decimal places",
            field, value
        )));
    }
    BigDecimal::from_str(&text).map_err(|e| {
        AppError::ValidationError(format!("invalid {} conversion for {}: {}", field, value, e))
    })
}

/// Decode a stored NUMERIC back into a float.
pub fn from_decimal(field: &str, value: &BigDecimal) -> AppResult<f64> {
    let text = value.to_string();
    let parsed = f64::from_str(&text).map_err(|e| {
        AppError::DataIntegrityError(format!("stored {} '{}' is not a number: {}", field, text, e))
    })?;
    if !parsed.is_finite() {
        return Err(AppError::DataIntegrityError(format!(
            "stored {} '{}' is out of range",
            field, text
        )));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_two_decimal_places() {
        let stored = to_decimal("rating", 4.5).unwrap();
        assert_eq!(stored, BigDecimal::from_str("4.50").unwrap());
        assert_eq!(from_decimal("rating", &stored).unwrap(), 4.5);
    }

    #[test]
    fn refuses_to_round_extra_precision() {
        let err = to_decimal("rating", 3.14159).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            from_decimal("rating", &to_decimal("rating", 4.57).unwrap()).unwrap(),
            4.57
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(to_decimal("rating", f64::NAN).is_err());
        assert!(to_decimal("rating", f64::INFINITY).is_err());
    }
}
