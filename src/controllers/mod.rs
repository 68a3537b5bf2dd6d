//! Controllers de la API
//!
//! Capa de orquestación entre rutas y repositorios: validación de requests,
//! consulta de los services puros y escritura vía repositorios.

pub mod bid_controller;
pub mod document_controller;
pub mod notification_controller;
pub mod platform_settings_controller;
pub mod ride_controller;
pub mod transporter_controller;
pub mod vehicle_controller;
