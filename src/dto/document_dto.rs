//! DTOs de documentos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::document::Document;

/// Request para registrar un documento subido
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    pub owner_type: String,
    pub owner_id: Uuid,

    #[validate(length(min = 2, max = 100))]
    pub document_type: String,

    #[validate(length(min = 5, max = 500))]
    pub file_url: String,
}

/// Request para transicionar el estado del documento.
/// `rejection_reason` es obligatoria cuando status = rejected.
#[derive(Debug, Deserialize)]
pub struct UpdateDocumentStatusRequest {
    pub status: String,
    pub rejection_reason: Option<String>,
}

/// Request de reemplazo de documento
#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceDocumentRequest {
    #[validate(length(min = 5, max = 500))]
    pub file_url: String,
}

/// Response de documento para la API
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub owner_type: String,
    pub owner_id: Uuid,
    pub document_type: String,
    pub file_url: String,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub replaced_by_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(d: Document) -> Self {
        Self {
            id: d.id,
            owner_type: d.owner_type,
            owner_id: d.owner_id,
            document_type: d.document_type,
            file_url: d.file_url,
            status: d.status,
            rejection_reason: d.rejection_reason,
            replaced_by_id: d.replaced_by_id,
            created_at: d.created_at,
        }
    }
}
