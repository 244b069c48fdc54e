use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

use crate::entities::child_record::{ChildRecord, SubmitChildRecordRequest};
use crate::entities::conversions;
use child_health_booklet_data::repository::{
    ChildRecordRepository, ChildRecordRepositoryTrait, RepositoryError,
};

/// Record service errors
#[derive(Debug, Error)]
pub enum RecordServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Not found error
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Trait for child record service operations
#[async_trait]
pub trait RecordServiceTrait {
    /// Validate a submit request
    fn validate_submit_request(
        &self,
        request: &SubmitChildRecordRequest,
    ) -> Result<(), RecordServiceError>;

    /// Validate and store a record, replacing any record with the same health ID
    async fn submit_record(
        &self,
        request: SubmitChildRecordRequest,
    ) -> Result<ChildRecord, RecordServiceError>;

    /// Get a record by health ID
    async fn get_record(&self, health_id: &str) -> Result<ChildRecord, RecordServiceError>;

    /// Number of stored records
    async fn record_count(&self) -> Result<usize, RecordServiceError>;
}

/// Child record service for domain logic
pub struct RecordService<R: ChildRecordRepositoryTrait> {
    repository: R,
}

impl<R: ChildRecordRepositoryTrait> RecordService<R> {
    /// Create a new record service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Map repository errors to service errors. A missing record is
    /// `Ok(None)` from the repository, so every error here is a store failure.
    fn map_repo_error(&self, err: RepositoryError) -> RecordServiceError {
        RecordServiceError::RepositoryError(err.to_string())
    }
}

#[async_trait]
impl<R: ChildRecordRepositoryTrait + Send + Sync> RecordServiceTrait for RecordService<R> {
    fn validate_submit_request(
        &self,
        request: &SubmitChildRecordRequest,
    ) -> Result<(), RecordServiceError> {
        if let Err(validation_errors) = request.validate() {
            let mut messages: Vec<String> = validation_errors
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |err| match &err.message {
                        Some(msg) => msg.to_string(),
                        None => format!("Invalid {}", field),
                    })
                })
                .collect();
            // field_errors() is a HashMap; keep the message stable
            messages.sort();

            return Err(RecordServiceError::ValidationError(messages.join("; ")));
        }

        Ok(())
    }

    async fn submit_record(
        &self,
        request: SubmitChildRecordRequest,
    ) -> Result<ChildRecord, RecordServiceError> {
        self.validate_submit_request(&request)?;

        let record = ChildRecord::from(request);
        let stored = self
            .repository
            .put(conversions::convert_to_data_record(&record))
            .await
            .map_err(|e| self.map_repo_error(e))?;

        info!("Stored child record: health_id={}", stored.health_id);
        Ok(conversions::convert_to_domain_record(stored))
    }

    async fn get_record(&self, health_id: &str) -> Result<ChildRecord, RecordServiceError> {
        match self.repository.get(health_id).await {
            Ok(Some(record)) => Ok(conversions::convert_to_domain_record(record)),
            Ok(None) => {
                debug!("No child record for health_id={}", health_id);
                Err(RecordServiceError::NotFound(health_id.to_string()))
            }
            Err(e) => Err(self.map_repo_error(e)),
        }
    }

    async fn record_count(&self) -> Result<usize, RecordServiceError> {
        self.repository
            .count()
            .await
            .map_err(|e| self.map_repo_error(e))
    }
}

/// Create a record service over a fresh in-memory repository
pub fn create_default_record_service() -> RecordService<ChildRecordRepository> {
    RecordService::new(ChildRecordRepository::new())
}
