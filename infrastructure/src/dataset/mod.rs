//! Dataset source adapters
//!
//! - [`FileDatasetSource`]: datasets in a local directory
//! - `HttpDatasetSource` (feature `remote-data`): datasets under a base URL

mod file;
#[cfg(feature = "remote-data")]
mod http;

pub use file::FileDatasetSource;
#[cfg(feature = "remote-data")]
pub use http::HttpDatasetSource;

use slapworld_application::DatasetSource;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Remote dataset base {0} requires the `remote-data` feature")]
    RemoteUnsupported(String),

    #[error("Could not build HTTP client: {0}")]
    Client(String),
}

/// Whether `base` names a remote location rather than a directory
pub fn is_remote(base: &str) -> bool {
    base.starts_with("http://") || base.starts_with("https://")
}

/// Pick the adapter for a configured dataset base
pub fn open_source(base: &str) -> Result<Arc<dyn DatasetSource>, SourceError> {
    if is_remote(base) {
        #[cfg(feature = "remote-data")]
        {
            let source = HttpDatasetSource::new(base).map_err(|e| SourceError::Client(e.to_string()))?;
            return Ok(Arc::new(source));
        }
        #[cfg(not(feature = "remote-data"))]
        {
            return Err(SourceError::RemoteUnsupported(base.to_string()));
        }
    }
    Ok(Arc::new(FileDatasetSource::new(base)))
}
