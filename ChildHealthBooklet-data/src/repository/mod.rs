// Repository module structure
pub mod errors;
mod child_record;
mod in_memory;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use child_record::{ChildRecordRepository, ChildRecordRepositoryTrait};
pub use in_memory::InMemoryStorage;

// Re-export test modules for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use child_record::tests;
