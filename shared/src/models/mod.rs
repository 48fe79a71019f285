//! Data models
//!
//! Field names follow the goods service's camelCase JSON.

pub mod goods;

// Re-exports
pub use goods::*;
