use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::models::child_record::ChildRecord;
use super::errors::RepositoryError;

/// In-memory storage for child records, keyed by health identifier.
///
/// Clones share the same underlying map. Each write holds the write lock for
/// the whole insert, so readers only ever observe complete records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    records: Arc<RwLock<HashMap<String, ChildRecord>>>,
}

impl InMemoryStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record stored under its health identifier
    pub fn put(&self, record: ChildRecord) -> Result<ChildRecord, RepositoryError> {
        let mut store = self.records.write()?;
        store.insert(record.health_id.clone(), record.clone());
        Ok(record)
    }

    /// Get a record by health identifier
    pub fn get(&self, health_id: &str) -> Result<Option<ChildRecord>, RepositoryError> {
        let store = self.records.read()?;
        Ok(store.get(health_id).cloned())
    }

    /// Number of stored records
    pub fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.records.read()?;
        Ok(store.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(health_id: &str, name: &str) -> ChildRecord {
        ChildRecord {
            health_id: health_id.to_string(),
            name: name.to_string(),
            age: String::new(),
            weight: String::new(),
            height: String::new(),
            parent: String::new(),
            illness: String::new(),
            consent: false,
            uploaded: false,
        }
    }

    #[test]
    fn test_put_then_get_returns_same_record() {
        let storage = InMemoryStorage::new();
        let stored = storage.put(record("A1", "Jane")).unwrap();

        assert_eq!(storage.get("A1").unwrap(), Some(stored));
        assert_eq!(storage.get("B2").unwrap(), None);
    }

    #[test]
    fn test_resubmission_overwrites_instead_of_merging() {
        let storage = InMemoryStorage::new();
        let mut first = record("A1", "Jane");
        first.illness = "asthma".to_string();
        storage.put(first).unwrap();

        storage.put(record("A1", "Janet")).unwrap();

        let current = storage.get("A1").unwrap().unwrap();
        assert_eq!(current.name, "Janet");
        assert_eq!(current.illness, "");
        assert_eq!(storage.count().unwrap(), 1);
    }

    #[test]
    fn test_clones_share_storage() {
        let storage = InMemoryStorage::new();
        let clone = storage.clone();

        clone.put(record("A1", "Jane")).unwrap();

        assert_eq!(storage.count().unwrap(), 1);
    }

    #[test]
    fn test_concurrent_writers_do_not_lose_records() {
        let storage = InMemoryStorage::new();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let storage = storage.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        storage.put(record(&format!("T{}-{}", t, i), "child")).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(storage.count().unwrap(), 400);
    }
}
