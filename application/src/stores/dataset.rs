//! Generic load-once dataset

use crate::ports::dataset_source::{DatasetSource, LoadError};
use rand::Rng;
use serde::de::DeserializeOwned;
use slapworld_domain::random_sample;
use tracing::{debug, error, info, warn};

/// A flat, ordered collection of records fetched from one resource.
#[derive(Debug, Clone)]
pub struct DatasetStore<T> {
    resource: String,
    label: &'static str,
    records: Vec<T>,
    loaded: bool,
}

impl<T: DeserializeOwned> DatasetStore<T> {
    /// Empty, not-yet-loaded store for `resource`. `label` names the
    /// records in log lines ("countries", "cards").
    pub fn new(resource: impl Into<String>, label: &'static str) -> Self {
        Self {
            resource: resource.into(),
            label,
            records: Vec::new(),
            loaded: false,
        }
    }

    /// A store that is already loaded with `records`
    pub fn preloaded(resource: impl Into<String>, label: &'static str, records: Vec<T>) -> Self {
        Self {
            resource: resource.into(),
            label,
            records,
            loaded: true,
        }
    }

    /// Fetch and parse the resource, replacing the held records.
    ///
    /// On any failure the previous contents and load flag are kept.
    pub async fn load<S>(&mut self, source: &S) -> Result<usize, LoadError>
    where
        S: DatasetSource + ?Sized,
    {
        debug!("Fetching {} from {}", self.label, source.locate(&self.resource));

        let response = source.fetch(&self.resource).await.inspect_err(|e| {
            error!("Error loading {} data: {}", self.label, e);
        })?;

        if !response.is_success() {
            let err = LoadError::Status {
                resource: self.resource.clone(),
                status: response.status,
            };
            error!("Error loading {} data: {}", self.label, err);
            return Err(err);
        }

        let records: Vec<T> = serde_json::from_slice(&response.body).map_err(|source| {
            let err = LoadError::Malformed {
                resource: self.resource.clone(),
                source,
            };
            error!("Error loading {} data: {}", self.label, err);
            err
        })?;

        self.records = records;
        self.loaded = true;
        info!("Loaded {} {}", self.records.len(), self.label);
        Ok(self.records.len())
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record, or an empty slice (with a warning) before load
    pub fn all(&self) -> &[T] {
        if !self.loaded {
            warn!("{} not loaded yet; call load() first", self.label);
            return &[];
        }
        &self.records
    }

    /// First record matching `predicate`
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.records.iter().find(|r| predicate(r))
    }

    /// Every record matching `predicate`, in dataset order
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<&T> {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Records in dataset order, without the not-loaded warning
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// `min(count, len)` distinct records in uniformly random order
    pub fn random_with<R>(&self, count: usize, rng: &mut R) -> Vec<&T>
    where
        R: Rng + ?Sized,
    {
        if !self.loaded || self.records.is_empty() {
            warn!("No {} available", self.label);
            return Vec::new();
        }
        random_sample(&self.records, count, rng)
    }
}
