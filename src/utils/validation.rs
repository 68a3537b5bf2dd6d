//! Utilidades de validación
//!
//! Chequeos compartidos que no calzan en el derive de `validator`.

use rust_decimal::Decimal;

use crate::models::platform_settings::FeeTier;
use crate::utils::errors::AppError;

/// Un pincode válido son 6 dígitos
pub fn is_valid_pincode(pincode: &str) -> bool {
    pincode.len() == 6 && pincode.chars().all(|c| c.is_ascii_digit())
}

/// Valida un porcentaje de comisión (0 a 100 inclusive)
pub fn validate_percent(field: &str, percent: Decimal) -> Result<(), AppError> {
    if percent < Decimal::ZERO || percent > Decimal::from(100) {
        return Err(AppError::BadRequest(format!(
            "{} must be between 0 and 100, got {}",
            field, percent
        )));
    }
    Ok(())
}

/// Valida la configuración de tramos: thresholds no negativos, sin duplicados,
/// porcentajes en rango.
pub fn validate_tier_config(tiers: &[FeeTier]) -> Result<(), AppError> {
    for tier in tiers {
        if tier.amount < Decimal::ZERO {
            return Err(AppError::BadRequest(format!(
                "Tier threshold must be non-negative, got {}",
                tier.amount
            )));
        }
        validate_percent("tier percent", tier.percent)?;
    }
    let mut thresholds: Vec<Decimal> = tiers.iter().map(|t| t.amount).collect();
    thresholds.sort();
    thresholds.dedup();
    if thresholds.len() != tiers.len() {
        return Err(AppError::BadRequest(
            "Tier thresholds must be unique".to_string(),
        ));
    }
    Ok(())
}

/// Valida el rango de fees min/max
pub fn validate_fee_bounds(min_fee: Decimal, max_fee: Decimal) -> Result<(), AppError> {
    if min_fee < Decimal::ZERO {
        return Err(AppError::BadRequest("min_fee must be non-negative".to_string()));
    }
    if min_fee > max_fee {
        return Err(AppError::BadRequest(format!(
            "min_fee {} cannot exceed max_fee {}",
            min_fee, max_fee
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pincode_format() {
        assert!(is_valid_pincode("400001"));
        assert!(!is_valid_pincode("40001"));
        assert!(!is_valid_pincode("4000011"));
        assert!(!is_valid_pincode("40000a"));
    }

    #[test]
    fn test_percent_bounds() {
        assert!(validate_percent("p", Decimal::ZERO).is_ok());
        assert!(validate_percent("p", Decimal::from(100)).is_ok());
        assert!(validate_percent("p", Decimal::from(101)).is_err());
        assert!(validate_percent("p", Decimal::from(-1)).is_err());
    }

    #[test]
    fn test_tier_config_rejects_duplicates() {
        let tiers = vec![
            FeeTier { amount: Decimal::from(1000), percent: Decimal::from(5) },
            FeeTier { amount: Decimal::from(1000), percent: Decimal::from(7) },
        ];
        assert!(validate_tier_config(&tiers).is_err());
    }

    #[test]
    fn test_fee_bounds() {
        assert!(validate_fee_bounds(Decimal::from(50), Decimal::from(5000)).is_ok());
        assert!(validate_fee_bounds(Decimal::from(5000), Decimal::from(50)).is_err());
        assert!(validate_fee_bounds(Decimal::from(-1), Decimal::from(50)).is_err());
    }
}
