mod records_test;

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;

use child_health_booklet_domain::services::BookletService;
use child_health_booklet_domain::testing::MockRecordService;

use crate::api::routes::create_app;
use crate::api::state::AppState;
use crate::config::AppConfig;

/// Router over a mock record service
fn test_app(service: MockRecordService, legacy_not_found_status: bool) -> Router {
    let state = AppState::new(Arc::new(service), BookletService::default(), legacy_not_found_status);
    create_app(state, &AppConfig::default())
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
