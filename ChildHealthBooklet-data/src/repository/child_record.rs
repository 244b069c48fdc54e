use async_trait::async_trait;
use tracing::debug;

use crate::models::child_record::ChildRecord;
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Repository trait for child health records
#[async_trait]
pub trait ChildRecordRepositoryTrait {
    /// Insert or overwrite a record keyed by its health identifier
    async fn put(&self, record: ChildRecord) -> Result<ChildRecord, RepositoryError>;

    /// Get a record by health identifier
    async fn get(&self, health_id: &str) -> Result<Option<ChildRecord>, RepositoryError>;

    /// Number of stored records
    async fn count(&self) -> Result<usize, RepositoryError>;
}

/// Repository for child records.
/// Records live for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct ChildRecordRepository {
    storage: InMemoryStorage,
}

impl ChildRecordRepository {
    /// Create a new repository with empty storage
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }

    /// Create a repository over existing storage
    pub fn with_storage(storage: InMemoryStorage) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl ChildRecordRepositoryTrait for ChildRecordRepository {
    async fn put(&self, record: ChildRecord) -> Result<ChildRecord, RepositoryError> {
        debug!("Storing child record in memory: health_id={}", record.health_id);
        self.storage.put(record)
    }

    async fn get(&self, health_id: &str) -> Result<Option<ChildRecord>, RepositoryError> {
        debug!("Looking up child record: health_id={}", health_id);
        self.storage.get(health_id)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        self.storage.count()
    }
}

/// Mock child record repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock implementation of ChildRecordRepository for testing
    #[derive(Default)]
    pub struct MockChildRecordRepository {
        records: Mutex<HashMap<String, ChildRecord>>,
        fail_writes: bool,
    }

    impl MockChildRecordRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a mock repository with predefined records
        pub fn with_records(records: Vec<ChildRecord>) -> Self {
            let records = records
                .into_iter()
                .map(|r| (r.health_id.clone(), r))
                .collect();
            Self {
                records: Mutex::new(records),
                fail_writes: false,
            }
        }

        /// Make every `put` fail with a lock error
        pub fn with_write_failure(mut self) -> Self {
            self.fail_writes = true;
            self
        }
    }

    #[async_trait]
    impl ChildRecordRepositoryTrait for MockChildRecordRepository {
        async fn put(&self, record: ChildRecord) -> Result<ChildRecord, RepositoryError> {
            if self.fail_writes {
                return Err(RepositoryError::Lock("mock configured to fail writes".to_string()));
            }
            let mut records = self.records.lock()?;
            records.insert(record.health_id.clone(), record.clone());
            Ok(record)
        }

        async fn get(&self, health_id: &str) -> Result<Option<ChildRecord>, RepositoryError> {
            let records = self.records.lock()?;
            Ok(records.get(health_id).cloned())
        }

        async fn count(&self) -> Result<usize, RepositoryError> {
            let records = self.records.lock()?;
            Ok(records.len())
        }
    }

    #[tokio::test]
    async fn test_repository_put_and_get() {
        let repo = ChildRecordRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0, "Repository should start empty");

        let record = ChildRecord {
            health_id: "HID-1".to_string(),
            name: "Jane".to_string(),
            age: "5".to_string(),
            weight: String::new(),
            height: String::new(),
            parent: String::new(),
            illness: String::new(),
            consent: true,
            uploaded: false,
        };

        repo.put(record.clone()).await.unwrap();

        let fetched = repo.get("HID-1").await.unwrap();
        assert_eq!(fetched, Some(record));
        assert!(repo.get("HID-2").await.unwrap().is_none());

        // Cloned repositories share storage
        let repo2 = repo.clone();
        assert_eq!(repo2.count().await.unwrap(), 1);
    }
}
