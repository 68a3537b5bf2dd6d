//! Controller de transportistas
//!
//! Registro y ciclo de verificación: pending_verification → pending_approval
//! (documentación completa) → active (aprobación del admin), o rejected con
//! razón en cualquier punto.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::transporter_dto::{
    RegisterTransporterRequest, RejectTransporterRequest, TransporterResponse,
};
use crate::repositories::transporter_repository::TransporterRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::is_valid_pincode;

pub struct TransporterController {
    repository: TransporterRepository,
}

impl TransporterController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TransporterRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: RegisterTransporterRequest,
    ) -> Result<ApiResponse<TransporterResponse>, AppError> {
        request.validate()?;

        if let Some(pincodes) = &request.service_pincodes {
            if let Some(bad) = pincodes.iter().find(|p| !is_valid_pincode(p)) {
                return Err(AppError::BadRequest(format!("Invalid service pincode '{}'", bad)));
            }
        }

        let transporter = self
            .repository
            .create(
                request.company_name,
                request.contact_email,
                request.contact_phone,
                request.service_pincodes,
                request.vehicle_types,
            )
            .await?;

        info!("Transporter {} registered ({})", transporter.id, transporter.company_name);

        Ok(ApiResponse::success_with_message(
            TransporterResponse::from(transporter),
            "Transporter registered, pending verification".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TransporterResponse, AppError> {
        let transporter = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Transporter {} not found", id)))?;

        Ok(TransporterResponse::from(transporter))
    }

    pub async fn mark_documents_complete(&self, id: Uuid) -> Result<TransporterResponse, AppError> {
        let transporter = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Transporter {} not found", id)))?;

        if transporter.status == "rejected" {
            return Err(AppError::Conflict(
                "Rejected transporters must re-register".to_string(),
            ));
        }
        if transporter.documents_complete {
            return Ok(TransporterResponse::from(transporter));
        }

        let updated = self.repository.mark_documents_complete(id).await?;
        Ok(TransporterResponse::from(updated))
    }

    pub async fn approve(&self, id: Uuid) -> Result<TransporterResponse, AppError> {
        let transporter = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Transporter {} not found", id)))?;

        if transporter.status == "active" {
            return Ok(TransporterResponse::from(transporter));
        }
        if !transporter.documents_complete {
            return Err(AppError::Conflict(
                "Cannot approve a transporter with incomplete documents".to_string(),
            ));
        }

        let updated = self.repository.approve(id).await?;
        info!("Transporter {} approved", id);
        Ok(TransporterResponse::from(updated))
    }

    pub async fn reject(
        &self,
        id: Uuid,
        request: RejectTransporterRequest,
    ) -> Result<TransporterResponse, AppError> {
        request.validate()?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Transporter {} not found", id)))?;

        let updated = self.repository.reject(id, request.reason).await?;
        info!("Transporter {} rejected", id);
        Ok(TransporterResponse::from(updated))
    }
}
