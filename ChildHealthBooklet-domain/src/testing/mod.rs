// Testing utilities and mock implementations for the domain layer
// This module is only available in tests or when the "mock" feature is enabled

// Re-export useful test mocks from the data layer
pub use child_health_booklet_data::repository::tests::MockChildRecordRepository;

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;

use crate::entities::child_record::{ChildRecord, SubmitChildRecordRequest};
use crate::services::record::{RecordServiceError, RecordServiceTrait};

/// A valid submit request with only the required fields set
pub fn sample_request(health_id: &str, name: &str) -> SubmitChildRecordRequest {
    SubmitChildRecordRequest {
        health_id: health_id.to_string(),
        name: name.to_string(),
        ..Default::default()
    }
}

/// A record with only the required fields set
pub fn sample_record(health_id: &str, name: &str) -> ChildRecord {
    ChildRecord::from(sample_request(health_id, name))
}

/// Mock implementation of the RecordServiceTrait for testing
#[derive(Default)]
pub struct MockRecordService {
    records: RwLock<HashMap<String, ChildRecord>>,
    should_fail_storage: bool,
}

impl MockRecordService {
    /// Create a new mock record service
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail every storage operation
    pub fn with_storage_failure(mut self) -> Self {
        self.should_fail_storage = true;
        self
    }

    /// Add a pre-defined record to the mock
    pub fn with_record(self, record: ChildRecord) -> Self {
        if let Ok(mut records) = self.records.write() {
            records.insert(record.health_id.clone(), record);
        }
        self
    }

    fn storage_failure(&self) -> Result<(), RecordServiceError> {
        if self.should_fail_storage {
            Err(RecordServiceError::RepositoryError(
                "mock is configured to fail storage".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordServiceTrait for MockRecordService {
    fn validate_submit_request(
        &self,
        request: &SubmitChildRecordRequest,
    ) -> Result<(), RecordServiceError> {
        if request.health_id.is_empty() || request.name.is_empty() {
            return Err(RecordServiceError::ValidationError(
                "healthId and name are required".to_string(),
            ));
        }
        Ok(())
    }

    async fn submit_record(
        &self,
        request: SubmitChildRecordRequest,
    ) -> Result<ChildRecord, RecordServiceError> {
        self.validate_submit_request(&request)?;
        self.storage_failure()?;

        let record = ChildRecord::from(request);
        let mut records = self
            .records
            .write()
            .map_err(|e| RecordServiceError::RepositoryError(e.to_string()))?;
        records.insert(record.health_id.clone(), record.clone());
        Ok(record)
    }

    async fn get_record(&self, health_id: &str) -> Result<ChildRecord, RecordServiceError> {
        self.storage_failure()?;

        let records = self
            .records
            .read()
            .map_err(|e| RecordServiceError::RepositoryError(e.to_string()))?;
        records
            .get(health_id)
            .cloned()
            .ok_or_else(|| RecordServiceError::NotFound(health_id.to_string()))
    }

    async fn record_count(&self) -> Result<usize, RecordServiceError> {
        self.storage_failure()?;

        let records = self
            .records
            .read()
            .map_err(|e| RecordServiceError::RepositoryError(e.to_string()))?;
        Ok(records.len())
    }
}
