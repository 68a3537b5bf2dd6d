//! Modelo de Document
//!
//! Artefactos de verificación adjuntos a un driver, vehículo, transportista o
//! viaje. El reemplazo conserva historia: el documento viejo pasa a `replaced`
//! con back-reference `replaced_by_id` y queda excluido de los listados
//! activos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del documento - columna string `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Verified,
    Rejected,
    Expired,
    Replaced,
    Deleted,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Verified => "verified",
            DocumentStatus::Rejected => "rejected",
            DocumentStatus::Expired => "expired",
            DocumentStatus::Replaced => "replaced",
            DocumentStatus::Deleted => "deleted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(DocumentStatus::Pending),
            "verified" => Some(DocumentStatus::Verified),
            "rejected" => Some(DocumentStatus::Rejected),
            "expired" => Some(DocumentStatus::Expired),
            "replaced" => Some(DocumentStatus::Replaced),
            "deleted" => Some(DocumentStatus::Deleted),
            _ => None,
        }
    }

    /// Transiciones legales desde el estado actual.
    /// `replace` no pasa por acá: se maneja como operación propia.
    pub fn can_transition_to(&self, next: DocumentStatus) -> bool {
        match self {
            DocumentStatus::Pending => matches!(
                next,
                DocumentStatus::Verified | DocumentStatus::Rejected | DocumentStatus::Deleted
            ),
            DocumentStatus::Verified => {
                matches!(next, DocumentStatus::Expired | DocumentStatus::Deleted)
            }
            DocumentStatus::Rejected | DocumentStatus::Expired => {
                matches!(next, DocumentStatus::Deleted)
            }
            DocumentStatus::Replaced | DocumentStatus::Deleted => false,
        }
    }
}

/// Tipo de dueño del documento - columna string `owner_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentOwnerType {
    Driver,
    Vehicle,
    Transporter,
    Trip,
}

impl DocumentOwnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentOwnerType::Driver => "driver",
            DocumentOwnerType::Vehicle => "vehicle",
            DocumentOwnerType::Transporter => "transporter",
            DocumentOwnerType::Trip => "trip",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "driver" => Some(DocumentOwnerType::Driver),
            "vehicle" => Some(DocumentOwnerType::Vehicle),
            "transporter" => Some(DocumentOwnerType::Transporter),
            "trip" => Some(DocumentOwnerType::Trip),
            _ => None,
        }
    }
}

/// Document principal - mapea exactamente a la tabla `documents`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    pub id: Uuid,
    pub owner_type: String,
    pub owner_id: Uuid,
    pub document_type: String,
    pub file_url: String,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub replaced_by_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn document_status(&self) -> Option<DocumentStatus> {
        DocumentStatus::parse(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_transitions() {
        assert!(DocumentStatus::Pending.can_transition_to(DocumentStatus::Verified));
        assert!(DocumentStatus::Pending.can_transition_to(DocumentStatus::Rejected));
        assert!(DocumentStatus::Verified.can_transition_to(DocumentStatus::Expired));
        assert!(!DocumentStatus::Rejected.can_transition_to(DocumentStatus::Verified));
        assert!(!DocumentStatus::Replaced.can_transition_to(DocumentStatus::Verified));
        assert!(!DocumentStatus::Deleted.can_transition_to(DocumentStatus::Pending));
    }
}
