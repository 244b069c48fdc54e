use std::collections::HashMap;
use std::sync::Once;

use async_trait::async_trait;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use child_health_booklet_domain::health::{
    store_component, ComponentStatus as DomainComponentStatus, HealthComponent, HealthServiceTrait,
    SystemHealth, SystemStatus,
};
use child_health_booklet_domain::services::BookletService;

use crate::api::state::{AppState, RecordService};
use crate::entities::common::RootResponse;

/// Detailed health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok", "degraded", or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// Unix timestamp of when the response was generated
    pub timestamp: i64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<i64>,
    /// Details about various components of the system
    pub components: ComponentStatus,
    /// Environment information
    pub environment: String,
}

/// Status of individual system components
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Record store status
    pub store: ComponentHealthStatus,
    /// Booklet renderer status
    pub renderer: ComponentHealthStatus,
}

/// Health status for an individual component
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok", "degraded", or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Track the time when the server started
static SERVER_START_TIME: OnceCell<i64> = OnceCell::new();
static INIT: Once = Once::new();

// Initialize the server start time
pub fn initialize_server_start_time() {
    INIT.call_once(|| {
        let _ = SERVER_START_TIME.set(Utc::now().timestamp());
    });
}

/// Liveness endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Backend is running", body = RootResponse)
    ),
    tag = "health"
)]
pub async fn root() -> Json<RootResponse> {
    debug!("Root endpoint called");
    Json(RootResponse {
        message: "Backend is running!".to_string(),
    })
}

/// Detailed health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Service is not healthy", body = HealthResponse),
        (status = 503, description = "Service is degraded", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now().timestamp();
    let uptime = SERVER_START_TIME.get().map(|&start| (now - start).max(0));

    let system_health = state.health.get_system_health().await;

    let overall_status = match system_health.status {
        SystemStatus::Healthy => "ok",
        SystemStatus::Degraded => "degraded",
        SystemStatus::Unhealthy => "error",
    };

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime,
        components: ComponentStatus {
            store: component_response(system_health.components.get("store")),
            renderer: component_response(system_health.components.get("renderer")),
        },
        environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
    };

    let status = match system_health.status {
        SystemStatus::Healthy => StatusCode::OK,
        SystemStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
        SystemStatus::Unhealthy => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(response))
}

fn component_response(component: Option<&HealthComponent>) -> ComponentHealthStatus {
    match component {
        Some(component) => ComponentHealthStatus {
            status: map_component_status(&component.status),
            message: component.details.clone(),
        },
        None => ComponentHealthStatus {
            status: "error".to_string(),
            message: Some("component not reported".to_string()),
        },
    }
}

/// Map domain component status to API status string
fn map_component_status(status: &DomainComponentStatus) -> String {
    match status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Degraded => "degraded",
        DomainComponentStatus::Unhealthy => "error",
    }
    .to_string()
}

/// Health service backed by the live record service and booklet renderer
pub struct AppHealthService {
    records: RecordService,
    booklets: BookletService,
}

impl std::fmt::Debug for AppHealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppHealthService")
            .field("booklets", &self.booklets)
            .finish_non_exhaustive()
    }
}

impl AppHealthService {
    pub fn new(records: RecordService, booklets: BookletService) -> Self {
        Self { records, booklets }
    }
}

#[async_trait]
impl HealthServiceTrait for AppHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        let count = self.records.record_count().await.map_err(|e| e.to_string());
        components.insert("store".to_string(), store_component(count));

        let renderer_details = match self.booklets.archive() {
            Some(archive) => format!("archiving to {}", archive.dir().display()),
            None => "in-memory rendering".to_string(),
        };
        components.insert(
            "renderer".to_string(),
            HealthComponent {
                status: DomainComponentStatus::Healthy,
                details: Some(renderer_details),
            },
        );

        SystemHealth::from_components(components)
    }
}
