//! DTOs de request/response de la API

pub mod bid_dto;
pub mod common;
pub mod document_dto;
pub mod notification_dto;
pub mod platform_settings_dto;
pub mod ride_dto;
pub mod transporter_dto;
pub mod vehicle_dto;
