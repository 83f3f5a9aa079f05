//! Load Datasets use case
//!
//! Fetches the country and card datasets. The two are independent, so
//! both loads run concurrently; the first failure aborts initialization.

use crate::config::GameConfig;
use crate::ports::dataset_source::{DatasetSource, LoadError};
use crate::stores::{card_store::CardStore, country_store::CountryStore};
use std::sync::Arc;
use tracing::info;

/// Input for the LoadDatasets use case
#[derive(Debug, Clone)]
pub struct LoadDatasetsInput {
    pub countries_resource: String,
    pub cards_resource: String,
}

impl LoadDatasetsInput {
    pub fn new(countries_resource: impl Into<String>, cards_resource: impl Into<String>) -> Self {
        Self {
            countries_resource: countries_resource.into(),
            cards_resource: cards_resource.into(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(&config.countries_resource, &config.cards_resource)
    }
}

/// Both stores, loaded
#[derive(Debug, Clone)]
pub struct LoadedDatasets {
    pub countries: CountryStore,
    pub cards: CardStore,
}

/// Use case for loading both datasets
pub struct LoadDatasetsUseCase<S: DatasetSource + ?Sized> {
    source: Arc<S>,
}

impl<S: DatasetSource + ?Sized> LoadDatasetsUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, input: LoadDatasetsInput) -> Result<LoadedDatasets, LoadError> {
        let mut countries = CountryStore::with_resource(input.countries_resource);
        let mut cards = CardStore::with_resource(input.cards_resource);
        let source = self.source.as_ref();

        let (country_count, card_count) =
            tokio::try_join!(countries.load(source), cards.load(source))?;

        info!(
            "Datasets ready: {} countries, {} cards",
            country_count, card_count
        );

        Ok(LoadedDatasets { countries, cards })
    }
}
