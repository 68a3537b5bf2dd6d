//! Controller de platform settings
//!
//! CRUD del singleton de comisión y preview del fee. El preview usa
//! exactamente el mismo compute_fee que el cobro real: fetch-then-pass.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crate::dto::common::ApiResponse;
use crate::dto::platform_settings_dto::{
    FeePreviewResponse, SettingsResponse, UpdateSettingsRequest,
};
use crate::models::platform_settings::CommissionMode;
use crate::repositories::platform_settings_repository::{
    PlatformSettingsRepository, SettingsPatch,
};
use crate::services::fee_service::compute_fee;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_fee_bounds, validate_percent, validate_tier_config};

pub struct PlatformSettingsController {
    repository: PlatformSettingsRepository,
}

impl PlatformSettingsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PlatformSettingsRepository::new(pool),
        }
    }

    pub async fn get(&self) -> Result<SettingsResponse, AppError> {
        let settings = self.repository.get_or_create().await?;
        Ok(SettingsResponse::from(settings))
    }

    pub async fn update(
        &self,
        request: UpdateSettingsRequest,
    ) -> Result<ApiResponse<SettingsResponse>, AppError> {
        if let Some(mode) = &request.commission_mode {
            if CommissionMode::parse(mode).is_none() {
                return Err(AppError::BadRequest(format!(
                    "commission_mode must be 'shadow' or 'live', got '{}'",
                    mode
                )));
            }
        }
        if let Some(percent) = request.base_percent {
            validate_percent("base_percent", percent)?;
        }
        if let Some(tiers) = &request.tier_config {
            validate_tier_config(tiers)?;
        }

        // Los bounds se validan contra el valor efectivo post-patch
        let current = self.repository.get_or_create().await?;
        let min_fee = request.min_fee.unwrap_or(current.min_fee);
        let max_fee = request.max_fee.unwrap_or(current.max_fee);
        validate_fee_bounds(min_fee, max_fee)?;

        let updated = self
            .repository
            .update(SettingsPatch {
                commission_enabled: request.commission_enabled,
                commission_mode: request.commission_mode,
                tier_config: request.tier_config,
                base_percent: request.base_percent,
                min_fee: request.min_fee,
                max_fee: request.max_fee,
            })
            .await?;

        info!(
            "Platform settings updated: enabled={}, mode={}",
            updated.commission_enabled, updated.commission_mode
        );

        Ok(ApiResponse::success_with_message(
            SettingsResponse::from(updated),
            "Settings updated".to_string(),
        ))
    }

    pub async fn preview(&self, amount: Decimal) -> Result<FeePreviewResponse, AppError> {
        if amount <= Decimal::ZERO {
            return Err(AppError::BadRequest("Preview amount must be positive".to_string()));
        }

        let settings = self.repository.get_or_create().await?;
        let breakdown = compute_fee(amount, &settings);

        Ok(FeePreviewResponse::from(breakdown))
    }
}
