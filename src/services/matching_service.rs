//! Matching de transportistas para rides nuevos
//!
//! Heurística best-effort sobre pincode de servicio y tipo de vehículo. El
//! resultado (score + razón) es un hint para la UI de notificaciones, no un
//! ranking autoritativo.

use crate::models::ride::Ride;
use crate::models::transporter::Transporter;

/// Score de matching con la razón legible que lo justifica
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub score: i32,
    pub reason: String,
}

const SCORE_PINCODE_EXACT: i32 = 50;
const SCORE_PINCODE_PREFIX: i32 = 30;
const SCORE_VEHICLE_TYPE: i32 = 40;

/// Puntúa un transportista contra un ride. Devuelve None si no hay ninguna
/// señal de match (no se genera notificación).
pub fn score_transporter(ride: &Ride, transporter: &Transporter) -> Option<MatchResult> {
    let mut score = 0;
    let mut reasons: Vec<String> = Vec::new();

    if let (Some(pincode), Some(service_pincodes)) =
        (&ride.pickup_pincode, &transporter.service_pincodes)
    {
        if service_pincodes.iter().any(|p| p == pincode) {
            score += SCORE_PINCODE_EXACT;
            reasons.push(format!("serves pickup pincode {}", pincode));
        } else if let Some(prefix) = pincode.get(..3) {
            // get(..3) en vez de indexar: un pincode con bytes multibyte no
            // debe reventar el scoring
            if service_pincodes.iter().any(|p| p.starts_with(prefix)) {
                // mismo distrito postal: match parcial
                score += SCORE_PINCODE_PREFIX;
                reasons.push(format!("serves nearby pincodes ({}xxx)", prefix));
            }
        }
    }

    if let (Some(required), Some(types)) = (&ride.required_vehicle_type, &transporter.vehicle_types)
    {
        if types.iter().any(|t| t.eq_ignore_ascii_case(required)) {
            score += SCORE_VEHICLE_TYPE;
            reasons.push(format!("operates {} vehicles", required));
        }
    }

    if score == 0 {
        return None;
    }

    Some(MatchResult {
        score,
        reason: reasons.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn ride(pincode: Option<&str>, vehicle_type: Option<&str>) -> Ride {
        Ride {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            pickup_location: "Nashik".to_string(),
            drop_location: "Surat".to_string(),
            pickup_pincode: pincode.map(|s| s.to_string()),
            drop_pincode: None,
            ride_date: Utc::now().date_naive(),
            pickup_time: None,
            drop_time: None,
            status: "pending".to_string(),
            price: Decimal::from(18000),
            cargo_type: None,
            weight_kg: None,
            required_vehicle_type: vehicle_type.map(|s| s.to_string()),
            transporter_id: None,
            assigned_driver_id: None,
            assigned_vehicle_id: None,
            bidding_status: "open".to_string(),
            accepted_bid_id: None,
            pickup_completed: false,
            delivery_completed: false,
            pickup_completed_at: None,
            delivery_completed_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn transporter(pincodes: &[&str], types: &[&str]) -> Transporter {
        Transporter {
            id: Uuid::new_v4(),
            company_name: "Transporte Rápido".to_string(),
            contact_email: "flota@rapido.test".to_string(),
            contact_phone: None,
            service_pincodes: if pincodes.is_empty() {
                None
            } else {
                Some(pincodes.iter().map(|s| s.to_string()).collect())
            },
            vehicle_types: if types.is_empty() {
                None
            } else {
                Some(types.iter().map(|s| s.to_string()).collect())
            },
            status: "active".to_string(),
            rejection_reason: None,
            is_verified: true,
            documents_complete: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_exact_pincode_and_vehicle_match() {
        let result = score_transporter(
            &ride(Some("422001"), Some("truck")),
            &transporter(&["422001"], &["truck", "van"]),
        )
        .unwrap();
        assert_eq!(result.score, SCORE_PINCODE_EXACT + SCORE_VEHICLE_TYPE);
        assert!(result.reason.contains("422001"));
    }

    #[test]
    fn test_prefix_pincode_scores_lower() {
        let result = score_transporter(
            &ride(Some("422001"), None),
            &transporter(&["422115"], &[]),
        )
        .unwrap();
        assert_eq!(result.score, SCORE_PINCODE_PREFIX);
    }

    #[test]
    fn test_no_signal_means_no_notification() {
        assert!(score_transporter(
            &ride(Some("110001"), Some("truck")),
            &transporter(&["560034"], &["van"]),
        )
        .is_none());
        assert!(score_transporter(&ride(None, None), &transporter(&[], &[])).is_none());
    }

    #[test]
    fn test_multibyte_pincode_does_not_panic() {
        // "áé01" son 4 chars pero 6 bytes; el corte del prefijo no puede
        // caer dentro de un char
        let result = score_transporter(
            &ride(Some("áé01"), Some("truck")),
            &transporter(&["422115"], &["truck"]),
        )
        .unwrap();
        assert_eq!(result.score, SCORE_VEHICLE_TYPE);
    }

    #[test]
    fn test_vehicle_type_is_case_insensitive() {
        let result = score_transporter(
            &ride(None, Some("Truck")),
            &transporter(&[], &["truck"]),
        )
        .unwrap();
        assert_eq!(result.score, SCORE_VEHICLE_TYPE);
    }
}
