use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{booklet, health, records};
use crate::api::state::AppState;
use crate::config::AppConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    debug!("Creating application router");

    let app = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/upload", post(records::upload_record))
        .route("/booklet/:health_id", get(booklet::get_booklet))
        .with_state(state);

    debug!("Routes configured");

    // Configure the Swagger UI using the helper function
    let app = app.merge(configure_swagger_routes());

    // Initialize health check service startup time
    health::initialize_server_start_time();

    app.layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Cross-origin policy: listed origins, any method and header, credentials
/// allowed. Methods and headers are mirrored because wildcards cannot be
/// combined with credentials.
pub fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
