use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::IntoResponse,
};
use tracing::{info, instrument};

use child_health_booklet_domain::entities::SubmitChildRecordRequest;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::entities::child_record::{PublicChildRecordRequest, UploadResponse};

/// Submit a child record, replacing any record with the same health ID
#[utoipa::path(
    post,
    path = "/upload",
    request_body = PublicChildRecordRequest,
    responses(
        (status = 200, description = "Record stored", body = UploadResponse),
        (status = 400, description = "Malformed JSON", body = PublicErrorResponse),
        (status = 422, description = "Missing, mistyped or empty required fields", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "records"
)]
#[instrument(skip(state, payload))]
pub async fn upload_record(
    State(state): State<AppState>,
    payload: Result<Json<PublicChildRecordRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    info!("Received child record upload: health_id={}", request.health_id);

    let record = state
        .records
        .submit_record(convert_to_domain_request(request))
        .await?;

    Ok(Json(UploadResponse::success(record.health_id)))
}

// Convert public request to domain request
fn convert_to_domain_request(request: PublicChildRecordRequest) -> SubmitChildRecordRequest {
    SubmitChildRecordRequest {
        health_id: request.health_id,
        name: request.name,
        age: request.age,
        weight: request.weight,
        height: request.height,
        parent: request.parent,
        illness: request.illness,
        consent: request.consent,
        uploaded: request.uploaded,
    }
}
