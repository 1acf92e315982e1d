//! Configuration schema, loading and validation for share groups

pub mod accessor;
pub mod config;
pub mod docs;
pub mod registry;
pub mod schema;
pub mod source;
pub mod validator;

/// Re-export main types
pub use accessor::*;
pub use config::*;
pub use docs::*;
pub use registry::*;
pub use schema::*;
pub use source::*;
pub use validator::*;
