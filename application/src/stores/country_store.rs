//! Country store

use super::dataset::DatasetStore;
use crate::ports::dataset_source::{DatasetSource, LoadError};
use rand::Rng;
use slapworld_domain::{Country, CountryStat};
use tracing::debug;

/// Default resource name of the country dataset
pub const COUNTRIES_RESOURCE: &str = "countries.json";

/// Load-once collection of [`Country`] records
#[derive(Debug, Clone)]
pub struct CountryStore {
    data: DatasetStore<Country>,
}

impl CountryStore {
    pub fn new() -> Self {
        Self::with_resource(COUNTRIES_RESOURCE)
    }

    pub fn with_resource(resource: impl Into<String>) -> Self {
        Self {
            data: DatasetStore::new(resource, "countries"),
        }
    }

    pub fn from_countries(countries: Vec<Country>) -> Self {
        Self {
            data: DatasetStore::preloaded(COUNTRIES_RESOURCE, "countries", countries),
        }
    }

    pub async fn load<S>(&mut self, source: &S) -> Result<usize, LoadError>
    where
        S: DatasetSource + ?Sized,
    {
        self.data.load(source).await
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_loaded()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn all(&self) -> &[Country] {
        self.data.all()
    }

    pub fn by_name(&self, name: &str) -> Option<&Country> {
        let name = name.to_lowercase();
        self.data.find(|c| c.name.to_lowercase() == name)
    }

    pub fn by_iso(&self, iso: &str) -> Option<&Country> {
        self.data.find(|c| c.matches_iso(iso))
    }

    pub fn by_region(&self, region: &str) -> Vec<&Country> {
        let region = region.to_lowercase();
        self.data.filter(|c| c.region.to_lowercase() == region)
    }

    pub fn random(&self, count: usize) -> Vec<&Country> {
        self.random_with(count, &mut rand::thread_rng())
    }

    pub fn random_with<R>(&self, count: usize, rng: &mut R) -> Vec<&Country>
    where
        R: Rng + ?Sized,
    {
        self.data.random_with(count, rng)
    }

    /// Stats that can be compared between countries
    pub fn available_stats(&self) -> &'static [CountryStat] {
        &CountryStat::ALL
    }

    /// Value of the named stat, or 0 for an unknown name or missing value
    pub fn stat_value(&self, country: &Country, stat_name: &str) -> f64 {
        match stat_name.parse::<CountryStat>() {
            Ok(stat) => country.stat(stat),
            Err(e) => {
                debug!("{}", e);
                0.0
            }
        }
    }
}

impl Default for CountryStore {
    fn default() -> Self {
        Self::new()
    }
}
