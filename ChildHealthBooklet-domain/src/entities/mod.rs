// Domain entities and value objects
pub mod child_record;
pub mod conversions;

// Re-export common types for easier imports
pub use child_record::{ChildRecord, SubmitChildRecordRequest, FIELD_ORDER};
