use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Field names in the order they appear on a rendered booklet.
pub const FIELD_ORDER: [&str; 9] = [
    "healthId", "name", "age", "weight", "height", "parent", "illness", "consent", "uploaded",
];

/// Domain model for a child health record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ChildRecord {
    /// Unique health identifier
    pub health_id: String,

    /// Child's name
    pub name: String,

    /// Age as entered by the health worker
    pub age: String,

    /// Weight as entered by the health worker
    pub weight: String,

    /// Height as entered by the health worker
    pub height: String,

    /// Parent or guardian name
    pub parent: String,

    /// Known illnesses
    pub illness: String,

    /// Parental consent given
    pub consent: bool,

    /// Client-side upload flag
    pub uploaded: bool,
}

impl ChildRecord {
    /// Each field as a `(name, display value)` pair, in [`FIELD_ORDER`].
    pub fn fields(&self) -> [(&'static str, String); 9] {
        [
            (FIELD_ORDER[0], self.health_id.clone()),
            (FIELD_ORDER[1], self.name.clone()),
            (FIELD_ORDER[2], self.age.clone()),
            (FIELD_ORDER[3], self.weight.clone()),
            (FIELD_ORDER[4], self.height.clone()),
            (FIELD_ORDER[5], self.parent.clone()),
            (FIELD_ORDER[6], self.illness.clone()),
            (FIELD_ORDER[7], display_flag(self.consent).to_string()),
            (FIELD_ORDER[8], display_flag(self.uploaded).to_string()),
        ]
    }
}

fn display_flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Request payload for submitting a child record.
///
/// Optional fields left out (or sent as `null`) take their defaults when the
/// record is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SubmitChildRecordRequest {
    #[validate(length(min = 1, message = "healthId must not be empty"))]
    pub health_id: String,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    pub age: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub parent: Option<String>,
    pub illness: Option<String>,
    pub consent: Option<bool>,
    pub uploaded: Option<bool>,
}

impl From<SubmitChildRecordRequest> for ChildRecord {
    fn from(request: SubmitChildRecordRequest) -> Self {
        ChildRecord {
            health_id: request.health_id,
            name: request.name,
            age: request.age.unwrap_or_default(),
            weight: request.weight.unwrap_or_default(),
            height: request.height.unwrap_or_default(),
            parent: request.parent.unwrap_or_default(),
            illness: request.illness.unwrap_or_default(),
            consent: request.consent.unwrap_or(false),
            uploaded: request.uploaded.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_optional_fields_missing() {
        let request: SubmitChildRecordRequest =
            serde_json::from_str(r#"{"healthId":"A1","name":"Jane","age":"5","illness":null}"#).unwrap();
        let record = ChildRecord::from(request);

        assert_eq!(record.age, "5");
        assert_eq!(record.weight, "");
        assert_eq!(record.illness, "");
        assert!(!record.consent);
        assert!(!record.uploaded);
    }

    #[test]
    fn test_fields_follow_declared_order() {
        let record = ChildRecord::from(SubmitChildRecordRequest {
            health_id: "A1".to_string(),
            name: "Jane".to_string(),
            consent: Some(true),
            ..Default::default()
        });

        let names: Vec<&str> = record.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, FIELD_ORDER.to_vec());
        assert_eq!(record.fields()[7], ("consent", "True".to_string()));
        assert_eq!(record.fields()[8], ("uploaded", "False".to_string()));
    }

    #[test]
    fn test_empty_required_fields_fail_validation() {
        let request = SubmitChildRecordRequest {
            health_id: String::new(),
            name: "Jane".to_string(),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("health_id"));
        assert!(!errors.field_errors().contains_key("name"));
    }
}
