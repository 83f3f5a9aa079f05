//! Dataset source port
//!
//! Defines how the stores obtain the raw bytes of a static dataset.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to fetch {resource}: {message}")]
    Transport { resource: String, message: String },

    #[error("Failed to fetch {resource}: status {status}")]
    Status { resource: String, status: u16 },

    #[error("Malformed {resource}: {source}")]
    Malformed {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn transport(resource: impl Into<String>, message: impl ToString) -> Self {
        LoadError::Transport {
            resource: resource.into(),
            message: message.to_string(),
        }
    }

    /// Name of the dataset that failed
    pub fn resource(&self) -> &str {
        match self {
            LoadError::Transport { resource, .. }
            | LoadError::Status { resource, .. }
            | LoadError::Malformed { resource, .. } => resource,
        }
    }
}

/// What a transport hands back for a dataset request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl DatasetResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    pub fn not_found() -> Self {
        Self::new(404, Vec::new())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Source of static datasets, addressed by relative path
///
/// Implementations (adapters) live in the infrastructure layer. A
/// transport-level failure is an `Err`; a reachable source that has no
/// such resource answers with a non-success status instead.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self, resource: &str) -> Result<DatasetResponse, LoadError>;

    /// Human-readable location of `resource`, for logs and diagnostics
    fn locate(&self, resource: &str) -> String {
        resource.to_string()
    }
}
