// ChildHealthBooklet Domain
// Business logic for submitting child records and rendering booklets

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Re-export the data crate for convenience
pub use child_health_booklet_data as data;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
