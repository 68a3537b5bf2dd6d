//! Repositorios de persistencia
//!
//! Capa de acceso a PostgreSQL vía sqlx. Los controllers orquestan; acá no
//! hay reglas de negocio más allá de la forma de las queries.

pub mod bid_repository;
pub mod document_repository;
pub mod notification_repository;
pub mod platform_settings_repository;
pub mod ride_repository;
pub mod transporter_repository;
pub mod vehicle_repository;
