pub mod booklet;
pub mod record;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use booklet::{BookletError, BookletRenderer, BookletService};
pub use record::{create_default_record_service, RecordServiceError, RecordServiceTrait};
