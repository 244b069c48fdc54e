// ChildHealthBooklet-api lib.rs
//
// HTTP surface of the child health booklet service.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
