//! Máquina de estados del ride
//!
//! Tabla explícita de transiciones (estado actual → estados alcanzables)
//! consultada por un único punto de entrada. Reemplaza los chequeos de
//! legalidad duplicados que de otro modo se esparcen por handlers y UI.

use crate::models::ride::{Ride, RideStatus};
use crate::utils::errors::AppError;
use uuid::Uuid;

/// Estados alcanzables desde `from` vía UpdateStatus.
///
/// `assigned` es alcanzable desde `pending` por la vía de self-assign y
/// desde `bid_placed` por aceptación de puja.
pub fn allowed_transitions(from: RideStatus) -> &'static [RideStatus] {
    match from {
        RideStatus::Pending => &[
            RideStatus::BidPlaced,
            RideStatus::Scheduled,
            RideStatus::Assigned,
            RideStatus::Cancelled,
        ],
        RideStatus::BidPlaced => &[RideStatus::Assigned, RideStatus::Cancelled],
        RideStatus::Scheduled => &[RideStatus::Active, RideStatus::Cancelled],
        RideStatus::Assigned => &[RideStatus::Active, RideStatus::Cancelled],
        RideStatus::Active => &[RideStatus::Completed, RideStatus::Cancelled],
        RideStatus::Completed | RideStatus::Cancelled => &[],
    }
}

/// Resultado de validar un cambio de estado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionCheck {
    /// El estado pedido es el actual: éxito sin escritura (retry del cliente)
    NoOp,
    /// Transición legal, proceder con la escritura
    Apply,
}

/// Valida `from → to`. Mismo estado es no-op exitoso; transición ilegal
/// devuelve `InvalidTransition` sin escritura parcial.
pub fn check_transition(from: RideStatus, to: RideStatus) -> Result<TransitionCheck, AppError> {
    if from == to {
        return Ok(TransitionCheck::NoOp);
    }
    if allowed_transitions(from).contains(&to) {
        Ok(TransitionCheck::Apply)
    } else {
        Err(AppError::InvalidTransition {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
        })
    }
}

/// Valida la asignación de driver/vehicle sobre un ride.
///
/// Legal solo en `pending` o `bid_placed`. Idempotente si se repite con el
/// mismo par; con un par distinto post-asignación falla con Conflict.
pub fn check_assignment(
    ride: &Ride,
    driver_id: Uuid,
    vehicle_id: Uuid,
) -> Result<TransitionCheck, AppError> {
    if ride.assigned_driver_id == Some(driver_id) && ride.assigned_vehicle_id == Some(vehicle_id) {
        return Ok(TransitionCheck::NoOp);
    }
    if ride.assigned_driver_id.is_some() || ride.assigned_vehicle_id.is_some() {
        return Err(AppError::Conflict(
            "Ride already has a different driver/vehicle assigned".to_string(),
        ));
    }
    match ride.ride_status() {
        Some(RideStatus::Pending) | Some(RideStatus::BidPlaced) => Ok(TransitionCheck::Apply),
        Some(current) => Err(AppError::InvalidTransition {
            from: current.as_str().to_string(),
            to: RideStatus::Assigned.as_str().to_string(),
        }),
        None => Err(AppError::Internal(format!(
            "Ride {} has unknown status '{}'",
            ride.id, ride.status
        ))),
    }
}

/// Valida marcar pickup/delivery: solo mientras el ride está `active`.
pub fn check_trip_progress(ride: &Ride) -> Result<(), AppError> {
    match ride.ride_status() {
        Some(RideStatus::Active) => Ok(()),
        Some(current) => Err(AppError::InvalidTransition {
            from: current.as_str().to_string(),
            to: RideStatus::Active.as_str().to_string(),
        }),
        None => Err(AppError::Internal(format!(
            "Ride {} has unknown status '{}'",
            ride.id, ride.status
        ))),
    }
}

/// Valida completar el viaje. El driver necesita ambos flags en true; el
/// admin puede forzar con override (la subida del proof-of-delivery ocurre
/// entre delivery-confirm y completar, por eso no hay auto-transición).
pub fn check_completion(ride: &Ride, admin_override: bool) -> Result<TransitionCheck, AppError> {
    let current = ride.ride_status().ok_or_else(|| {
        AppError::Internal(format!("Ride {} has unknown status '{}'", ride.id, ride.status))
    })?;
    if current == RideStatus::Completed {
        return Ok(TransitionCheck::NoOp);
    }
    if admin_override {
        if current.is_terminal() {
            return Err(AppError::InvalidTransition {
                from: current.as_str().to_string(),
                to: RideStatus::Completed.as_str().to_string(),
            });
        }
        return Ok(TransitionCheck::Apply);
    }
    check_transition(current, RideStatus::Completed)?;
    if !ride.pickup_completed || !ride.delivery_completed {
        return Err(AppError::BadRequest(
            "Both pickup and delivery must be confirmed before completing the trip".to_string(),
        ));
    }
    Ok(TransitionCheck::Apply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn ride(status: &str) -> Ride {
        Ride {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            pickup_location: "Mumbai".to_string(),
            drop_location: "Pune".to_string(),
            pickup_pincode: Some("400001".to_string()),
            drop_pincode: Some("411001".to_string()),
            ride_date: Utc::now().date_naive(),
            pickup_time: None,
            drop_time: None,
            status: status.to_string(),
            price: Decimal::from(15000),
            cargo_type: Some("steel".to_string()),
            weight_kg: Some(Decimal::from(1200)),
            required_vehicle_type: Some("truck".to_string()),
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

    #[test]
    fn test_pending_cannot_skip_to_completed() {
        let err = check_transition(RideStatus::Pending, RideStatus::Completed).unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition { .. }));
    }

    #[test]
    fn test_same_status_is_noop() {
        assert_eq!(
            check_transition(RideStatus::Active, RideStatus::Active).unwrap(),
            TransitionCheck::NoOp
        );
        // repetido: sigue siendo no-op, nunca error
        assert_eq!(
            check_transition(RideStatus::Active, RideStatus::Active).unwrap(),
            TransitionCheck::NoOp
        );
    }

    #[test]
    fn test_terminal_states_admit_nothing() {
        for terminal in [RideStatus::Completed, RideStatus::Cancelled] {
            assert!(allowed_transitions(terminal).is_empty());
            assert!(check_transition(terminal, RideStatus::Active).is_err());
        }
    }

    #[test]
    fn test_any_non_terminal_can_cancel() {
        for status in [
            RideStatus::Pending,
            RideStatus::BidPlaced,
            RideStatus::Scheduled,
            RideStatus::Assigned,
            RideStatus::Active,
        ] {
            assert_eq!(
                check_transition(status, RideStatus::Cancelled).unwrap(),
                TransitionCheck::Apply
            );
        }
    }

    #[test]
    fn test_legal_happy_path() {
        assert!(check_transition(RideStatus::Pending, RideStatus::BidPlaced).is_ok());
        assert!(check_transition(RideStatus::BidPlaced, RideStatus::Assigned).is_ok());
        assert!(check_transition(RideStatus::Assigned, RideStatus::Active).is_ok());
        assert!(check_transition(RideStatus::Active, RideStatus::Completed).is_ok());
    }

    #[test]
    fn test_assignment_idempotent_with_same_pair() {
        let driver = Uuid::new_v4();
        let vehicle = Uuid::new_v4();
        let mut r = ride("assigned");
        r.assigned_driver_id = Some(driver);
        r.assigned_vehicle_id = Some(vehicle);

        assert_eq!(
            check_assignment(&r, driver, vehicle).unwrap(),
            TransitionCheck::NoOp
        );
    }

    #[test]
    fn test_assignment_conflict_with_different_pair() {
        let mut r = ride("assigned");
        r.assigned_driver_id = Some(Uuid::new_v4());
        r.assigned_vehicle_id = Some(Uuid::new_v4());

        let err = check_assignment(&r, Uuid::new_v4(), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_assignment_only_from_pending_or_bid_placed() {
        assert!(check_assignment(&ride("pending"), Uuid::new_v4(), Uuid::new_v4()).is_ok());
        assert!(check_assignment(&ride("bid_placed"), Uuid::new_v4(), Uuid::new_v4()).is_ok());
        assert!(check_assignment(&ride("active"), Uuid::new_v4(), Uuid::new_v4()).is_err());
    }

    #[test]
    fn test_trip_progress_only_while_active() {
        assert!(check_trip_progress(&ride("active")).is_ok());
        assert!(check_trip_progress(&ride("assigned")).is_err());
        assert!(check_trip_progress(&ride("completed")).is_err());
    }

    #[test]
    fn test_completion_requires_both_flags() {
        let mut r = ride("active");
        r.pickup_completed = true;
        assert!(check_completion(&r, false).is_err());

        r.delivery_completed = true;
        assert_eq!(check_completion(&r, false).unwrap(), TransitionCheck::Apply);
    }

    #[test]
    fn test_admin_override_skips_flags_but_not_terminals() {
        let r = ride("active");
        assert_eq!(check_completion(&r, true).unwrap(), TransitionCheck::Apply);

        assert!(check_completion(&ride("cancelled"), true).is_err());
        assert_eq!(
            check_completion(&ride("completed"), true).unwrap(),
            TransitionCheck::NoOp
        );
    }
}
