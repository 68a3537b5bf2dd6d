//! Modelo de Transporter
//!
//! Empresa de flota que puja en el marketplace. Progresión de estado:
//! pending_verification → pending_approval → active, o rejected en cualquier
//! punto (con razón registrada).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del transportista - columna string `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransporterStatus {
    PendingVerification,
    PendingApproval,
    Active,
    Rejected,
}

impl TransporterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransporterStatus::PendingVerification => "pending_verification",
            TransporterStatus::PendingApproval => "pending_approval",
            TransporterStatus::Active => "active",
            TransporterStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending_verification" => Some(TransporterStatus::PendingVerification),
            "pending_approval" => Some(TransporterStatus::PendingApproval),
            "active" => Some(TransporterStatus::Active),
            "rejected" => Some(TransporterStatus::Rejected),
            _ => None,
        }
    }
}

/// Transporter principal - mapea exactamente a la tabla `transporters`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transporter {
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
    pub updated_at: DateTime<Utc>,
}

impl Transporter {
    pub fn transporter_status(&self) -> Option<TransporterStatus> {
        TransporterStatus::parse(&self.status)
    }

    /// Elegibilidad para pujar en el marketplace
    pub fn can_bid(&self) -> bool {
        self.status == "active" && self.is_verified && self.documents_complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transporter(status: &str, verified: bool, docs: bool) -> Transporter {
        Transporter {
            id: Uuid::new_v4(),
            company_name: "Fletes del Norte".to_string(),
            contact_email: "ops@fletes.test".to_string(),
            contact_phone: None,
            service_pincodes: None,
            vehicle_types: None,
            status: status.to_string(),
            rejection_reason: None,
            is_verified: verified,
            documents_complete: docs,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_bidding_eligibility_gating() {
        assert!(transporter("active", true, true).can_bid());
        assert!(!transporter("active", false, true).can_bid());
        assert!(!transporter("active", true, false).can_bid());
        assert!(!transporter("pending_approval", true, true).can_bid());
        assert!(!transporter("rejected", true, true).can_bid());
    }
}
