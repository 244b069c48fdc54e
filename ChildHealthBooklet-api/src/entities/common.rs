use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error response format
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicErrorResponse {
    /// Machine-readable error code, or "Not found" for unknown booklets
    pub error: String,

    /// Human-readable error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PublicErrorResponse {
    /// The `{"error": "Not found"}` body returned for unknown booklets
    pub fn not_found() -> Self {
        Self {
            error: "Not found".to_string(),
            message: None,
        }
    }

    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: Some(message.into()),
        }
    }
}

/// Static liveness message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "Backend is running!")]
    pub message: String,
}
