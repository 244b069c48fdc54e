use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::root,
        crate::api::handlers::health::health_check,

        // Record endpoints
        crate::api::handlers::records::upload_record,

        // Booklet endpoints
        crate::api::handlers::booklet::get_booklet,
    ),
    components(
        schemas(
            // Entities
            crate::entities::child_record::PublicChildRecordRequest,
            crate::entities::child_record::UploadResponse,
            crate::entities::common::PublicErrorResponse,
            crate::entities::common::RootResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Liveness and health endpoints"),
        (name = "records", description = "Child record submission"),
        (name = "booklets", description = "Printable booklet download")
    ),
    info(
        title = "Child Health Booklet API",
        version = "0.1.0",
        description = "Submit child health records and download them as printable booklets",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
