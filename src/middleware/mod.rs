//! Middleware del servidor
//!
//! Capas HTTP compartidas por todos los routers.

pub mod cors;

pub use cors::*;
