//! Calculador de comisión de la plataforma
//!
//! Función pura y determinística sobre (monto, settings). El mismo código
//! sirve para el cobro real en la aceptación de pujas y para el preview del
//! admin, sin special-casing: los campos shadow siempre llevan el valor que
//! se cobraría si la comisión estuviera en modo live.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::platform_settings::{CommissionMode, PlatformSettings};

/// Desglose de comisión para un monto dado
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeBreakdown {
    pub final_price: Decimal,
    pub platform_fee: Decimal,
    pub platform_fee_percent: Decimal,
    pub transporter_earning: Decimal,
    pub shadow_platform_fee: Decimal,
    pub shadow_platform_fee_percent: Decimal,
}

/// Porcentaje aplicable: el tramo de threshold más alto con threshold <= monto;
/// si ninguno matchea, cae al base_percent.
fn applicable_percent(amount: Decimal, settings: &PlatformSettings) -> Decimal {
    let mut best: Option<&crate::models::platform_settings::FeeTier> = None;
    for tier in settings.tiers() {
        if tier.amount <= amount {
            match best {
                Some(current) if current.amount >= tier.amount => {}
                _ => best = Some(tier),
            }
        }
    }
    best.map(|t| t.percent).unwrap_or(settings.base_percent)
}

/// Computa el desglose de comisión para `amount` bajo `settings`.
///
/// Pasos: (1) porcentaje por tramos, (2) fee crudo = amount * percent / 100,
/// (3) clamp a [min_fee, max_fee], (4) shadow siempre reporta el valor
/// clampeado, (5) el fee efectivo es 0 salvo enabled && live.
pub fn compute_fee(amount: Decimal, settings: &PlatformSettings) -> FeeBreakdown {
    let percent = applicable_percent(amount, settings);
    let raw_fee = amount * percent / Decimal::from(100);
    let clamped_fee = raw_fee.max(settings.min_fee).min(settings.max_fee);

    let live = settings.commission_enabled && settings.mode() == CommissionMode::Live;
    let (platform_fee, platform_fee_percent) = if live {
        (clamped_fee, percent)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    FeeBreakdown {
        final_price: amount,
        platform_fee,
        platform_fee_percent,
        transporter_earning: amount - platform_fee,
        shadow_platform_fee: clamped_fee,
        shadow_platform_fee_percent: percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::platform_settings::FeeTier;
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn settings(enabled: bool, mode: &str) -> PlatformSettings {
        PlatformSettings {
            id: Uuid::new_v4(),
            commission_enabled: enabled,
            commission_mode: mode.to_string(),
            tier_config: Json(vec![
                FeeTier {
                    amount: Decimal::from(10000),
                    percent: Decimal::from(5),
                },
                FeeTier {
                    amount: Decimal::ZERO,
                    percent: Decimal::from(10),
                },
            ]),
            base_percent: Decimal::from(10),
            min_fee: Decimal::from(50),
            max_fee: Decimal::from(5000),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_shadow_mode_reports_would_be_fee() {
        let breakdown = compute_fee(Decimal::from(20000), &settings(true, "shadow"));
        assert_eq!(breakdown.shadow_platform_fee, Decimal::from(1000));
        assert_eq!(breakdown.shadow_platform_fee_percent, Decimal::from(5));
        assert_eq!(breakdown.platform_fee, Decimal::ZERO);
        assert_eq!(breakdown.transporter_earning, Decimal::from(20000));
        assert_eq!(breakdown.final_price, Decimal::from(20000));
    }

    #[test]
    fn test_live_mode_clamps_to_max_fee() {
        let breakdown = compute_fee(Decimal::from(200000), &settings(true, "live"));
        // crudo = 200000 * 5% = 10000, clampeado a max_fee
        assert_eq!(breakdown.platform_fee, Decimal::from(5000));
        assert_eq!(breakdown.transporter_earning, Decimal::from(195000));
        assert_eq!(breakdown.shadow_platform_fee, Decimal::from(5000));
    }

    #[test]
    fn test_amount_below_top_tier_matches_zero_threshold_tier() {
        let breakdown = compute_fee(Decimal::from(5000), &settings(true, "live"));
        assert_eq!(breakdown.platform_fee, Decimal::from(500));
        assert_eq!(breakdown.platform_fee_percent, Decimal::from(10));
        assert_eq!(breakdown.transporter_earning, Decimal::from(4500));
    }

    #[test]
    fn test_commission_disabled_charges_zero() {
        let breakdown = compute_fee(Decimal::from(20000), &settings(false, "live"));
        assert_eq!(breakdown.platform_fee, Decimal::ZERO);
        assert_eq!(breakdown.transporter_earning, Decimal::from(20000));
        // shadow sigue reportando el valor que se cobraría
        assert_eq!(breakdown.shadow_platform_fee, Decimal::from(1000));
    }

    #[test]
    fn test_empty_tiers_fall_back_to_base_percent() {
        let mut s = settings(true, "live");
        s.tier_config = Json(vec![]);
        let breakdown = compute_fee(Decimal::from(1000), &s);
        // 1000 * 10% = 100, dentro de [50, 5000]
        assert_eq!(breakdown.platform_fee, Decimal::from(100));
        assert_eq!(breakdown.platform_fee_percent, Decimal::from(10));
    }

    #[test]
    fn test_min_fee_clamp() {
        let breakdown = compute_fee(Decimal::from(100), &settings(true, "live"));
        // crudo = 100 * 10% = 10, clampeado hacia arriba a min_fee
        assert_eq!(breakdown.platform_fee, Decimal::from(50));
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let s = settings(true, "live");
        let a = compute_fee(Decimal::from(12345), &s);
        let b = compute_fee(Decimal::from(12345), &s);
        assert_eq!(a, b);
    }
}
