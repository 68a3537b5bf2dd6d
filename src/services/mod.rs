//! Services module
//!
//! Lógica de dominio pura: máquina de estados del ride, ranking y
//! precondiciones de pujas, calculador de comisión y heurística de matching.
//! Los services no tocan la base de datos; los controllers orquestan.

pub mod bid_acceptance_service;
pub mod bid_ranking_service;
pub mod fee_service;
pub mod matching_service;
pub mod ride_transition_service;
