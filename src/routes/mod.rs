//! Routers HTTP del sistema
//!
//! Un router por recurso, anidados bajo /api en main.

pub mod bid_routes;
pub mod document_routes;
pub mod notification_routes;
pub mod platform_settings_routes;
pub mod ride_routes;
pub mod transporter_routes;
pub mod vehicle_routes;
