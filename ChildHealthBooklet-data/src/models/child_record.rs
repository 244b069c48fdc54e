use serde::{Deserialize, Serialize};

/// Storage model for a child health record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRecord {
    /// Health identifier, the storage key
    pub health_id: String,

    /// Child's name
    pub name: String,

    pub age: String,
    pub weight: String,
    pub height: String,

    /// Parent or guardian
    pub parent: String,

    /// Known illnesses or conditions
    pub illness: String,

    /// Whether parental consent was given
    pub consent: bool,

    /// Whether the client had marked the record as uploaded
    pub uploaded: bool,
}
