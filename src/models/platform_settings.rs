//! Modelo de PlatformSettings
//!
//! Fila singleton con la configuración de comisión de la plataforma. Solo el
//! super-admin la muta vía el endpoint de settings; el calculador de fees la
//! recibe como dependencia explícita (fetch-then-pass, nunca estado ambiente).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Modo de comisión - columna string `commission_mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionMode {
    Shadow,
    Live,
}

impl CommissionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionMode::Shadow => "shadow",
            CommissionMode::Live => "live",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "shadow" => Some(CommissionMode::Shadow),
            "live" => Some(CommissionMode::Live),
            _ => None,
        }
    }
}

/// Tramo de comisión: aplica `percent` a montos >= `amount`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeTier {
    pub amount: Decimal,
    pub percent: Decimal,
}

/// PlatformSettings - mapea a la fila singleton de `platform_settings`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PlatformSettings {
    pub id: Uuid,
    pub commission_enabled: bool,
    pub commission_mode: String,
    pub tier_config: Json<Vec<FeeTier>>,
    pub base_percent: Decimal,
    pub min_fee: Decimal,
    pub max_fee: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl PlatformSettings {
    pub fn mode(&self) -> CommissionMode {
        CommissionMode::parse(&self.commission_mode).unwrap_or(CommissionMode::Shadow)
    }

    pub fn tiers(&self) -> &[FeeTier] {
        &self.tier_config.0
    }
}
