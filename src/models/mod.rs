//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar (PKs UUID, columnas
//! enum como string, montos como NUMERIC vía rust_decimal).

pub mod bid;
pub mod document;
pub mod notification;
pub mod platform_settings;
pub mod ride;
pub mod transporter;
pub mod vehicle;
