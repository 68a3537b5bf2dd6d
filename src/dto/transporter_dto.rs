//! DTOs de transportistas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::transporter::Transporter;

/// Request de registro de transportista
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterTransporterRequest {
    #[validate(length(min = 2, max = 200))]
    pub company_name: String,

    #[validate(email)]
    pub contact_email: String,

    pub contact_phone: Option<String>,
    pub service_pincodes: Option<Vec<String>>,
    pub vehicle_types: Option<Vec<String>>,
}

/// Request de rechazo: la razón es obligatoria
#[derive(Debug, Deserialize, Validate)]
pub struct RejectTransporterRequest {
    #[validate(length(min = 3, max = 500))]
    pub reason: String,
}

/// Response de transportista para la API
#[derive(Debug, Serialize)]
pub struct TransporterResponse {
    pub id: Uuid,
    pub company_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub service_pincodes: Option<Vec<String>>,
    pub vehicle_types: Option<Vec<String>>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub is_verified: bool,
    pub documents_complete: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Transporter> for TransporterResponse {
    fn from(t: Transporter) -> Self {
        Self {
            id: t.id,
            company_name: t.company_name,
            contact_email: t.contact_email,
            contact_phone: t.contact_phone,
            service_pincodes: t.service_pincodes,
            vehicle_types: t.vehicle_types,
            status: t.status,
            rejection_reason: t.rejection_reason,
            is_verified: t.is_verified,
            documents_complete: t.documents_complete,
            created_at: t.created_at,
        }
    }
}
