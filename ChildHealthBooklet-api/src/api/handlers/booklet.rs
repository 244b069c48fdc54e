use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use tracing::{info, instrument};

use child_health_booklet_domain::services::RecordServiceError;

use crate::api::error::ApiError;
use crate::api::state::AppState;

/// Download the booklet PDF for a stored record
#[utoipa::path(
    get,
    path = "/booklet/{health_id}",
    params(
        ("health_id" = String, Path, description = "Health identifier of the record")
    ),
    responses(
        (status = 200, description = "Rendered booklet", content_type = "application/pdf", body = Vec<u8>),
        (status = 404, description = "No record for this health ID", body = PublicErrorResponse),
        (status = 500, description = "Rendering or archiving failed", body = PublicErrorResponse),
    ),
    tag = "booklets"
)]
#[instrument(skip(state))]
pub async fn get_booklet(
    State(state): State<AppState>,
    Path(health_id): Path<String>,
) -> Result<Response, ApiError> {
    let record = match state.records.get_record(&health_id).await {
        Ok(record) => record,
        Err(RecordServiceError::NotFound(_)) => {
            info!("Booklet requested for unknown health ID");
            return Err(ApiError::NotFound(state.not_found_status()));
        }
        Err(e) => return Err(e.into()),
    };

    let bytes = state.booklets.generate(&record).await?;
    info!("Serving booklet ({} bytes)", bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, attachment_header(&record.health_id)?),
        ],
        bytes,
    )
        .into_response())
}

/// `Content-Disposition` naming the download `<health_id>.pdf`
fn attachment_header(health_id: &str) -> Result<HeaderValue, ApiError> {
    let value = format!("attachment; filename=\"{}.pdf\"", download_file_stem(health_id));
    HeaderValue::from_str(&value).map_err(|e| ApiError::Internal(e.to_string()))
}

/// Header-safe download name. Only a suggestion to the browser, so it may be
/// lossy; archived copies are named by `archive_file_stem` instead.
fn download_file_stem(health_id: &str) -> String {
    let stem: String = health_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.chars().all(|c| c == '.') {
        stem.replace('.', "_")
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_header() {
        assert_eq!(
            attachment_header("A1").unwrap(),
            "attachment; filename=\"A1.pdf\""
        );
        assert_eq!(
            attachment_header("a\"b").unwrap(),
            "attachment; filename=\"a_b.pdf\""
        );
    }

    #[test]
    fn test_download_file_stem() {
        assert_eq!(download_file_stem("HID-1700000000"), "HID-1700000000");
        assert_eq!(download_file_stem("../etc/passwd"), ".._etc_passwd");
        assert_eq!(download_file_stem(".."), "__");
        assert_eq!(download_file_stem("Zoë"), "Zo_");
    }
}
