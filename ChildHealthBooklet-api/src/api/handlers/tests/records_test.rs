use axum::http::StatusCode;
use serde_json::json;

use child_health_booklet_domain::services::RecordServiceTrait;
use child_health_booklet_domain::testing::MockRecordService;

use super::{body_json, json_post, send, test_app};

#[tokio::test]
async fn test_upload_returns_success_payload() {
    let app = test_app(MockRecordService::new(), false);

    let response = send(app, json_post("/upload", r#"{"healthId":"A1","name":"Jane","age":"5"}"#)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "success", "healthId": "A1"}));
}

#[tokio::test]
async fn test_upload_missing_name_is_unprocessable() {
    let app = test_app(MockRecordService::new(), false);

    let response = send(app, json_post("/upload", r#"{"healthId":"A1"}"#)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_upload_wrong_type_is_unprocessable() {
    let app = test_app(MockRecordService::new(), false);

    let response = send(app, json_post("/upload", r#"{"healthId":"A1","name":"Jane","consent":"yes"}"#)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_upload_empty_health_id_is_unprocessable() {
    let app = test_app(MockRecordService::new(), false);

    let response = send(app, json_post("/upload", r#"{"healthId":"","name":"Jane"}"#)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_upload_malformed_json_is_bad_request() {
    let app = test_app(MockRecordService::new(), false);

    let response = send(app, json_post("/upload", r#"{"healthId":"A1","#)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "bad_request");
}

#[tokio::test]
async fn test_upload_storage_failure_is_internal_error() {
    let app = test_app(MockRecordService::new().with_storage_failure(), false);

    let response = send(app, json_post("/upload", r#"{"healthId":"A1","name":"Jane"}"#)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["message"], "An unexpected error occurred");
}

#[tokio::test]
async fn test_mock_validation_matches_required_fields() {
    let service = MockRecordService::new();
    let request = child_health_booklet_domain::testing::sample_request("", "Jane");
    assert!(service.validate_submit_request(&request).is_err());
}
