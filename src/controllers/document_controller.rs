//! Controller de documentos
//!
//! Transiciones de verificación (pending → verified | rejected | expired) y
//! reemplazo con historia. El rechazo exige razón.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::document_dto::{
    CreateDocumentRequest, DocumentResponse, ReplaceDocumentRequest, UpdateDocumentStatusRequest,
};
use crate::models::document::{DocumentOwnerType, DocumentStatus};
use crate::repositories::document_repository::DocumentRepository;
use crate::utils::errors::AppError;

pub struct DocumentController {
    repository: DocumentRepository,
}

impl DocumentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DocumentRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDocumentRequest,
    ) -> Result<ApiResponse<DocumentResponse>, AppError> {
        request.validate()?;

        let owner_type = DocumentOwnerType::parse(&request.owner_type).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown document owner type '{}'", request.owner_type))
        })?;

        let document = self
            .repository
            .create(
                owner_type.as_str().to_string(),
                request.owner_id,
                request.document_type,
                request.file_url,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DocumentResponse::from(document),
            "Document submitted for verification".to_string(),
        ))
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateDocumentStatusRequest,
    ) -> Result<DocumentResponse, AppError> {
        let target = DocumentStatus::parse(&request.status).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown document status '{}'", request.status))
        })?;

        if target == DocumentStatus::Replaced {
            return Err(AppError::BadRequest(
                "Use the replace endpoint to replace a document".to_string(),
            ));
        }

        if target == DocumentStatus::Rejected
            && request
                .rejection_reason
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .is_empty()
        {
            return Err(AppError::BadRequest(
                "rejection_reason is required when rejecting a document".to_string(),
            ));
        }

        let document = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Document {} not found", id)))?;

        let current = document.document_status().ok_or_else(|| {
            AppError::Internal(format!("Document {} has unknown status '{}'", id, document.status))
        })?;

        if current == target {
            return Ok(DocumentResponse::from(document));
        }
        if !current.can_transition_to(target) {
            return Err(AppError::InvalidTransition {
                from: current.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }

        let reason = if target == DocumentStatus::Rejected {
            request.rejection_reason
        } else {
            None
        };

        let updated = self
            .repository
            .update_status(id, target.as_str(), reason)
            .await?;

        Ok(DocumentResponse::from(updated))
    }

    pub async fn replace(
        &self,
        id: Uuid,
        request: ReplaceDocumentRequest,
    ) -> Result<ApiResponse<DocumentResponse>, AppError> {
        request.validate()?;

        let replacement = self.repository.replace(id, request.file_url).await?;

        Ok(ApiResponse::success_with_message(
            DocumentResponse::from(replacement),
            "Document replaced".to_string(),
        ))
    }

    pub async fn list_active_by_owner(
        &self,
        owner_type: String,
        owner_id: Uuid,
    ) -> Result<Vec<DocumentResponse>, AppError> {
        let parsed = DocumentOwnerType::parse(&owner_type).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown document owner type '{}'", owner_type))
        })?;

        let documents = self
            .repository
            .find_active_by_owner(parsed.as_str(), owner_id)
            .await?;

        Ok(documents.into_iter().map(DocumentResponse::from).collect())
    }
}
