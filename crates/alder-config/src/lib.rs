pub mod bundle;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod resolve;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use dev::*;
pub use error::*;
pub use resolve::*;

// Re-export discovery and validation
pub use discovery::OptionsDiscovery;
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
