use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Child record as submitted by the client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicChildRecordRequest {
    /// Unique health identifier (required, non-empty)
    #[schema(example = "HID-1700000000000")]
    pub health_id: String,

    /// Child's name (required, non-empty)
    #[schema(example = "Jane")]
    pub name: String,

    /// Age (defaults to "")
    #[serde(default)]
    pub age: Option<String>,

    /// Weight (defaults to "")
    #[serde(default)]
    pub weight: Option<String>,

    /// Height (defaults to "")
    #[serde(default)]
    pub height: Option<String>,

    /// Parent or guardian (defaults to "")
    #[serde(default)]
    pub parent: Option<String>,

    /// Known illnesses (defaults to "")
    #[serde(default)]
    pub illness: Option<String>,

    /// Parental consent (defaults to false)
    #[serde(default)]
    pub consent: Option<bool>,

    /// Client-side upload flag (defaults to false)
    #[serde(default)]
    pub uploaded: Option<bool>,
}

/// Confirmation returned after a record is stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Always "success"
    #[schema(example = "success")]
    pub status: String,

    /// Health identifier the record was stored under
    pub health_id: String,
}

impl UploadResponse {
    pub fn success(health_id: String) -> Self {
        Self {
            status: "success".to_string(),
            health_id,
        }
    }
}
