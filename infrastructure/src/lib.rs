//! Infrastructure layer for slap-the-world
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dataset;
pub mod session;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_DATA_BASE, FileConfig, FileDataConfig,
    FileGameConfig, FileRenderConfig,
};
pub use dataset::{FileDatasetSource, SourceError, is_remote, open_source};
#[cfg(feature = "remote-data")]
pub use dataset::HttpDatasetSource;
pub use session::InMemorySessionStorage;
