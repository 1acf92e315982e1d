//! Core types for share group configuration

pub mod error;
pub mod types;

pub use error::*;
/// Re-export commonly used types
pub use types::*;
