pub mod booklet;
pub mod health;
pub mod records;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use booklet::get_booklet;
pub use health::{health_check, root};
pub use records::upload_record;
