//! Ranking de pujas
//!
//! Ordena las pujas de un ride de forma advisoria ("la más barata primero").
//! La plataforma NO auto-acepta la más baja: un admin acepta explícitamente.
//! Los montos se comparan como Decimal (fijo), nunca como float binario.

use crate::models::bid::Bid;

/// Ordena ascendente por monto; empates por created_at más temprano.
pub fn rank_bids(mut bids: Vec<Bid>) -> Vec<Bid> {
    bids.sort_by(|a, b| {
        a.amount
            .cmp(&b.amount)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    bids
}

/// Variante truncada para el endpoint `cheapest?limit=N`
pub fn cheapest_bids(bids: Vec<Bid>, limit: usize) -> Vec<Bid> {
    let mut ranked = rank_bids(bids);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn bid(amount: i64, offset_secs: i64) -> Bid {
        let now = Utc::now();
        Bid {
            id: Uuid::new_v4(),
            ride_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            transporter_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            amount: Decimal::from(amount),
            status: "pending".to_string(),
            created_at: now + Duration::seconds(offset_secs),
            updated_at: now + Duration::seconds(offset_secs),
        }
    }

    #[test]
    fn test_orders_by_amount_then_created_at() {
        let b500 = bid(500, 0);
        let b300_early = bid(300, 10);
        let b300_late = bid(300, 20);
        let b800 = bid(800, 5);

        let ranked = rank_bids(vec![
            b500.clone(),
            b300_early.clone(),
            b300_late.clone(),
            b800.clone(),
        ]);

        let ids: Vec<Uuid> = ranked.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![b300_early.id, b300_late.id, b500.id, b800.id]);
    }

    #[test]
    fn test_cheapest_truncates() {
        let bids = vec![bid(900, 0), bid(100, 0), bid(500, 0)];
        let top = cheapest_bids(bids, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].amount, Decimal::from(100));
        assert_eq!(top[1].amount, Decimal::from(500));
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_bids(vec![]).is_empty());
        assert!(cheapest_bids(vec![], 5).is_empty());
    }
}
