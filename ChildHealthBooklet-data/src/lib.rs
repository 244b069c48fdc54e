// ChildHealthBooklet Data
// This crate owns record storage and the on-disk booklet archive

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;

// Rendered booklet archive
pub mod archive;
