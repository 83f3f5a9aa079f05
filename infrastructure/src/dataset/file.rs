//! Local directory dataset source

use async_trait::async_trait;
use slapworld_application::{DatasetResponse, DatasetSource, LoadError};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::trace;

/// Serves datasets from files under a base directory.
///
/// A missing file answers with status 404, like a static file server
/// would; any other I/O failure is a transport error.
#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    base_dir: PathBuf,
}

impl FileDatasetSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &std::path::Path {
        &self.base_dir
    }

    fn path_for(&self, resource: &str) -> PathBuf {
        self.base_dir.join(resource.trim_start_matches("./"))
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch(&self, resource: &str) -> Result<DatasetResponse, LoadError> {
        let path = self.path_for(resource);
        trace!("Reading {}", path.display());

        match tokio::fs::read(&path).await {
            Ok(body) => Ok(DatasetResponse::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(DatasetResponse::not_found()),
            Err(e) => Err(LoadError::transport(resource, e)),
        }
    }

    fn locate(&self, resource: &str) -> String {
        self.path_for(resource).display().to_string()
    }
}
