use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "freight_marketplace");
}

#[tokio::test]
async fn test_invalid_transition_returns_conflict() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/ride/5f4e9d2a-0000-0000-0000-000000000001/status")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "status": "completed" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["code"], "INVALID_TRANSITION");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("pending"));
}

#[tokio::test]
async fn test_bid_accept_conflict_shape() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/bid/5f4e9d2a-0000-0000-0000-000000000002/status")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "status": "accepted" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    // Otra oferta ya fue aceptada: nunca debe ser error 500
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["code"], "BID_NOT_ACCEPTABLE");
}

#[tokio::test]
async fn test_fee_preview_contract() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/platform-settings/preview/1000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["final_price"], "1000");
    assert_eq!(body["platform_fee"], "50");
    assert_eq!(body["transporter_earning"], "950");
}

#[tokio::test]
async fn test_create_ride_validation_error() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ride")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "pickup_pincode": "" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// App de test con los mismos contratos de respuesta que el servidor real.
// Las rutas devuelven payloads representativos sin tocar la base de datos.
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "status": "ok",
                    "service": "freight_marketplace",
                }))
            }),
        )
        .route(
            "/api/ride/:id/status",
            patch(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({
                        "error": "Invalid Transition",
                        "message": "Cannot transition ride from 'pending' to 'completed'",
                        "details": { "from": "pending", "to": "completed" },
                        "code": "INVALID_TRANSITION",
                    })),
                )
                    .into_response()
            }),
        )
        .route(
            "/api/bid/:id/status",
            patch(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({
                        "error": "Bid Not Acceptable",
                        "message": "Ride already has an accepted bid",
                        "code": "BID_NOT_ACCEPTABLE",
                    })),
                )
                    .into_response()
            }),
        )
        .route(
            "/api/admin/platform-settings/preview/:amount",
            get(|| async {
                Json(json!({
                    "final_price": "1000",
                    "platform_fee": "50",
                    "platform_fee_percent": "5",
                    "transporter_earning": "950",
                    "shadow_platform_fee": "50",
                    "shadow_platform_fee_percent": "5",
                }))
            }),
        )
        .route(
            "/api/ride",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Bad Request",
                        "message": "Invalid pincode '40001': expected 6 digits",
                        "code": "BAD_REQUEST",
                    })),
                )
                    .into_response()
            }),
        )
}
