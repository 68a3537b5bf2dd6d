//! Precondiciones de aceptación de pujas
//!
//! La aceptación corre dentro de una transacción con lock de fila sobre el
//! ride (ver BidController); acá vive el chequeo puro para que la lógica de
//! carrera sea testeable sin base de datos. El perdedor de dos accepts
//! concurrentes observa siempre `BidNotAcceptable`.

use crate::models::bid::Bid;
use crate::models::ride::Ride;
use crate::utils::errors::AppError;

/// Valida que `bid` pueda aceptarse sobre `ride`. Cualquier violación
/// devuelve `BidNotAcceptable` y el caller no escribe nada.
pub fn validate_acceptance(ride: &Ride, bid: &Bid) -> Result<(), AppError> {
    if bid.ride_id != ride.id {
        return Err(AppError::BidNotAcceptable(
            "Bid does not belong to this ride".to_string(),
        ));
    }
    if !bid.is_pending() {
        return Err(AppError::BidNotAcceptable(format!(
            "Bid is already {}",
            bid.status
        )));
    }
    if ride.accepted_bid_id.is_some() {
        return Err(AppError::BidNotAcceptable(
            "Ride already has an accepted bid".to_string(),
        ));
    }
    if ride.bidding_status != "open" {
        return Err(AppError::BidNotAcceptable(format!(
            "Bidding is {} for this ride",
            ride.bidding_status
        )));
    }
    match ride.status.as_str() {
        "pending" | "bid_placed" => Ok(()),
        other => Err(AppError::BidNotAcceptable(format!(
            "Ride is {} and can no longer accept bids",
            other
        ))),
    }
}

/// Valida el rechazo manual de una puja: solo legal mientras está pendiente.
/// Sin efectos en cascada sobre el ride.
pub fn validate_rejection(bid: &Bid) -> Result<(), AppError> {
    if !bid.is_pending() {
        return Err(AppError::BidNotAcceptable(format!(
            "Only pending bids can be rejected, bid is {}",
            bid.status
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn ride() -> Ride {
        Ride {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            pickup_location: "Delhi".to_string(),
            drop_location: "Jaipur".to_string(),
            pickup_pincode: None,
            drop_pincode: None,
            ride_date: Utc::now().date_naive(),
            pickup_time: None,
            drop_time: None,
            status: "bid_placed".to_string(),
            price: Decimal::from(25000),
            cargo_type: None,
            weight_kg: None,
            required_vehicle_type: None,
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

    fn bid_for(ride: &Ride, status: &str) -> Bid {
        Bid {
            id: Uuid::new_v4(),
            ride_id: ride.id,
            user_id: Uuid::new_v4(),
            transporter_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            amount: Decimal::from(22000),
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_pending_bid_on_open_ride_is_acceptable() {
        let r = ride();
        assert!(validate_acceptance(&r, &bid_for(&r, "pending")).is_ok());
    }

    #[test]
    fn test_resolved_bid_is_not_acceptable() {
        let r = ride();
        for status in ["accepted", "rejected"] {
            let err = validate_acceptance(&r, &bid_for(&r, status)).unwrap_err();
            assert!(matches!(err, AppError::BidNotAcceptable(_)));
        }
    }

    #[test]
    fn test_ride_with_accepted_bid_rejects_second_accept() {
        // escenario de carrera: el primer accept ya ganó
        let mut r = ride();
        r.accepted_bid_id = Some(Uuid::new_v4());
        r.bidding_status = "closed".to_string();
        r.status = "assigned".to_string();

        let err = validate_acceptance(&r, &bid_for(&r, "pending")).unwrap_err();
        assert!(matches!(err, AppError::BidNotAcceptable(_)));
    }

    #[test]
    fn test_closed_bidding_admits_no_accepts() {
        let mut r = ride();
        r.bidding_status = "closed".to_string();
        let err = validate_acceptance(&r, &bid_for(&r, "pending")).unwrap_err();
        assert!(matches!(err, AppError::BidNotAcceptable(_)));
    }

    #[test]
    fn test_bid_from_other_ride_is_not_acceptable() {
        let r = ride();
        let other = ride();
        let foreign = bid_for(&other, "pending");
        assert!(validate_acceptance(&r, &foreign).is_err());
    }

    #[test]
    fn test_rejection_only_from_pending() {
        let r = ride();
        assert!(validate_rejection(&bid_for(&r, "pending")).is_ok());
        assert!(validate_rejection(&bid_for(&r, "accepted")).is_err());
        assert!(validate_rejection(&bid_for(&r, "rejected")).is_err());
    }
}
