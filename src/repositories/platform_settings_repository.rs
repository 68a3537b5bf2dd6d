//! Repositorio de platform settings
//!
//! Fila singleton. Se crea con defaults en el primer acceso si no existe;
//! solo el endpoint de admin la muta.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::platform_settings::{FeeTier, PlatformSettings};
use crate::utils::errors::AppError;

/// Campos mutables del singleton (PATCH parcial)
#[derive(Debug, Default)]
pub struct SettingsPatch {
    pub commission_enabled: Option<bool>,
    pub commission_mode: Option<String>,
    pub tier_config: Option<Vec<FeeTier>>,
    pub base_percent: Option<Decimal>,
    pub min_fee: Option<Decimal>,
    pub max_fee: Option<Decimal>,
}

pub struct PlatformSettingsRepository {
    pool: PgPool,
}

impl PlatformSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Devuelve el singleton, creándolo con defaults conservadores
    /// (comisión deshabilitada, modo shadow) si todavía no existe.
    pub async fn get_or_create(&self) -> Result<PlatformSettings, AppError> {
        if let Some(settings) =
            sqlx::query_as::<_, PlatformSettings>("SELECT * FROM platform_settings LIMIT 1")
                .fetch_optional(&self.pool)
                .await?
        {
            return Ok(settings);
        }

        let settings = sqlx::query_as::<_, PlatformSettings>(
            r#"
            INSERT INTO platform_settings (id, commission_enabled, commission_mode, tier_config,
                                           base_percent, min_fee, max_fee, updated_at)
            VALUES ($1, FALSE, 'shadow', $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(Json(Vec::<FeeTier>::new()))
        .bind(Decimal::from(10))
        .bind(Decimal::ZERO)
        .bind(Decimal::from(10000))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }

    pub async fn update(&self, patch: SettingsPatch) -> Result<PlatformSettings, AppError> {
        let current = self.get_or_create().await?;

        let settings = sqlx::query_as::<_, PlatformSettings>(
            r#"
            UPDATE platform_settings
            SET commission_enabled = $2, commission_mode = $3, tier_config = $4,
                base_percent = $5, min_fee = $6, max_fee = $7, updated_at = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(current.id)
        .bind(patch.commission_enabled.unwrap_or(current.commission_enabled))
        .bind(patch.commission_mode.unwrap_or(current.commission_mode))
        .bind(Json(patch.tier_config.unwrap_or(current.tier_config.0)))
        .bind(patch.base_percent.unwrap_or(current.base_percent))
        .bind(patch.min_fee.unwrap_or(current.min_fee))
        .bind(patch.max_fee.unwrap_or(current.max_fee))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }
}
