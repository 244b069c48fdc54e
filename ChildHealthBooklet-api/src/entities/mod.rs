// Public entities for the child health booklet API
// Data structures that cross the HTTP boundary

// Child record payloads
pub mod child_record;

// Common entities for error handling
pub mod common;
