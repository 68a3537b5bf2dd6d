//! DTOs de platform settings

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::platform_settings::{FeeTier, PlatformSettings};
use crate::services::fee_service::FeeBreakdown;

/// PATCH parcial del singleton de settings
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub commission_enabled: Option<bool>,
    pub commission_mode: Option<String>,
    pub tier_config: Option<Vec<FeeTier>>,
    pub base_percent: Option<Decimal>,
    pub min_fee: Option<Decimal>,
    pub max_fee: Option<Decimal>,
}

/// Response de settings para la API
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub commission_enabled: bool,
    pub commission_mode: String,
    pub tier_config: Vec<FeeTier>,
    pub base_percent: String,
    pub min_fee: String,
    pub max_fee: String,
    pub updated_at: DateTime<Utc>,
}

impl From<PlatformSettings> for SettingsResponse {
    fn from(s: PlatformSettings) -> Self {
        Self {
            commission_enabled: s.commission_enabled,
            commission_mode: s.commission_mode,
            tier_config: s.tier_config.0,
            base_percent: s.base_percent.to_string(),
            min_fee: s.min_fee.to_string(),
            max_fee: s.max_fee.to_string(),
            updated_at: s.updated_at,
        }
    }
}

/// Response del preview de comisión (mismo cálculo que el cobro real)
#[derive(Debug, Serialize)]
pub struct FeePreviewResponse {
    pub final_price: String,
    pub platform_fee: String,
    pub platform_fee_percent: String,
    pub transporter_earning: String,
    pub shadow_platform_fee: String,
    pub shadow_platform_fee_percent: String,
}

impl From<FeeBreakdown> for FeePreviewResponse {
    fn from(b: FeeBreakdown) -> Self {
        Self {
            final_price: b.final_price.to_string(),
            platform_fee: b.platform_fee.to_string(),
            platform_fee_percent: b.platform_fee_percent.to_string(),
            transporter_earning: b.transporter_earning.to_string(),
            shadow_platform_fee: b.shadow_platform_fee.to_string(),
            shadow_platform_fee_percent: b.shadow_platform_fee_percent.to_string(),
        }
    }
}
