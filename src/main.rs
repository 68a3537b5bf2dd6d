mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let env_config = EnvironmentConfig::default();

    // Configurar logging: DEBUG en desarrollo, INFO en producción
    let log_level = if env_config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🚛 Freight Marketplace - API de transporte de carga");
    info!("===================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // CORS abierto en desarrollo, restringido a orígenes configurados en prod
    let cors = if env_config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(env_config.cors_origins.clone())
    };

    let addr: SocketAddr = env_config.server_url().parse()?;
    let app_state = AppState::new(pool, env_config);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/ride", routes::ride_routes::create_ride_router())
        .nest("/api/bid", routes::bid_routes::create_bid_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest(
            "/api/transporter",
            routes::transporter_routes::create_transporter_router(),
        )
        .nest(
            "/api/document",
            routes::document_routes::create_document_router(),
        )
        .nest(
            "/api/admin/platform-settings",
            routes::platform_settings_routes::create_platform_settings_router(),
        )
        .nest(
            "/api/notification",
            routes::notification_routes::create_notification_router(),
        )
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚚 Endpoints MVC - Ride:");
    info!("   POST /api/ride - Crear viaje");
    info!("   GET  /api/ride - Listar viajes");
    info!("   GET  /api/ride/:id - Obtener viaje");
    info!("   PATCH /api/ride/:id/status - Actualizar estado del viaje");
    info!("   PATCH /api/ride/:id/assign - Asignar conductor y vehículo");
    info!("   POST /api/ride/:id/pickup-complete - Marcar recogida completa");
    info!("   POST /api/ride/:id/delivery-complete - Marcar entrega completa");
    info!("   POST /api/ride/:id/complete - Completar viaje");
    info!("   GET  /api/ride/:id/bids/cheapest - Ofertas más baratas");
    info!("💰 Endpoints MVC - Bid:");
    info!("   POST /api/bid - Crear oferta");
    info!("   PATCH /api/bid/:id/status - Aceptar/rechazar oferta");
    info!("   GET  /api/bid/ride/:ride_id - Ofertas por viaje");
    info!("   GET  /api/bid/transporter/:transporter_id - Ofertas por transportista");
    info!("🚗 Endpoints MVC - Vehicle:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PATCH /api/vehicle/:id/status - Actualizar estado");
    info!("🏢 Endpoints MVC - Transporter:");
    info!("   POST /api/transporter - Registrar transportista");
    info!("   GET  /api/transporter/:id - Obtener transportista");
    info!("   PATCH /api/transporter/:id/documents-complete - Documentos completos");
    info!("   PATCH /api/transporter/:id/approve - Aprobar transportista");
    info!("   PATCH /api/transporter/:id/reject - Rechazar transportista");
    info!("📄 Endpoints MVC - Document:");
    info!("   POST /api/document - Subir documento");
    info!("   PATCH /api/document/:id/status - Actualizar estado");
    info!("   POST /api/document/:id/replace - Reemplazar documento");
    info!("   GET  /api/document/owner/:owner_type/:owner_id - Documentos por dueño");
    info!("⚙️  Endpoints Admin - Platform Settings:");
    info!("   GET  /api/admin/platform-settings - Obtener configuración");
    info!("   PATCH /api/admin/platform-settings - Actualizar configuración");
    info!("   GET  /api/admin/platform-settings/preview/:amount - Preview de comisión");
    info!("🔔 Endpoints MVC - Notification:");
    info!("   GET  /api/notification/:id - Notificaciones por destinatario");
    info!("   PATCH /api/notification/:id/read - Marcar como leída");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                anyhow::anyhow!(e)
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check del servicio
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "freight_marketplace",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
