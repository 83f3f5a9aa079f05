//! Card store

use super::dataset::DatasetStore;
use crate::ports::dataset_source::{DatasetSource, LoadError};
use rand::Rng;
use slapworld_domain::{Card, CardCountry};
use std::collections::HashSet;

/// Default resource name of the card dataset
pub const CARDS_RESOURCE: &str = "cards.json";

/// Load-once collection of [`Card`] records
#[derive(Debug, Clone)]
pub struct CardStore {
    data: DatasetStore<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::with_resource(CARDS_RESOURCE)
    }

    pub fn with_resource(resource: impl Into<String>) -> Self {
        Self {
            data: DatasetStore::new(resource, "slapable cards"),
        }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            data: DatasetStore::preloaded(CARDS_RESOURCE, "slapable cards", cards),
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

    pub fn all(&self) -> &[Card] {
        self.data.all()
    }

    pub fn by_id(&self, id: &str) -> Option<&Card> {
        self.data.find(|c| c.id.eq_ignore_ascii_case(id))
    }

    pub fn by_country(&self, iso: &str) -> Vec<&Card> {
        self.data.filter(|c| c.belongs_to(iso))
    }

    pub fn by_category(&self, category: &str) -> Vec<&Card> {
        let category = category.to_lowercase();
        self.data.filter(|c| c.category.to_lowercase() == category)
    }

    pub fn random(&self, count: usize) -> Vec<&Card> {
        self.random_with(count, &mut rand::thread_rng())
    }

    pub fn random_with<R>(&self, count: usize, rng: &mut R) -> Vec<&Card>
    where
        R: Rng + ?Sized,
    {
        self.data.random_with(count, rng)
    }

    /// Distinct embedded countries, first card wins for a repeated ISO code.
    /// ISO codes are compared case-insensitively, as everywhere else.
    pub fn available_countries(&self) -> Vec<&CardCountry> {
        let mut seen = HashSet::new();
        self.data
            .iter()
            .map(|c| &c.country)
            .filter(|country| seen.insert(country.iso.to_uppercase()))
            .collect()
    }

    /// Distinct categories in first-occurrence order
    pub fn available_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.data
            .iter()
            .map(|c| c.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CARDS_JSON, StaticSource};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    async fn loaded() -> CardStore {
        let source = StaticSource::new().with(CARDS_RESOURCE, CARDS_JSON);
        let mut store = CardStore::new();
        store.load(&source).await.unwrap();
        store
    }

    fn ids(cards: &[&Card]) -> Vec<String> {
        cards.iter().map(|c| c.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_by_id() {
        let store = loaded().await;
        assert_eq!(store.by_id("de-001").unwrap().title, "Autobahn");
        assert_eq!(store.by_id("DE-001").unwrap().title, "Autobahn");
        assert!(store.by_id("xx-999").is_none());
    }

    #[tokio::test]
    async fn test_by_country_is_case_insensitive() {
        let store = loaded().await;
        let lower = ids(&store.by_country("us"));
        let upper = ids(&store.by_country("US"));

        assert_eq!(lower, vec!["us-001", "us-002"]);
        assert_eq!(lower, upper);
        assert!(store.by_country("FR").is_empty());
    }

    #[tokio::test]
    async fn test_by_category() {
        let store = loaded().await;
        assert_eq!(ids(&store.by_category("landmark")), vec!["de-001"]);
        assert_eq!(ids(&store.by_category("PERSON")), vec!["us-001", "de-002"]);
    }

    #[tokio::test]
    async fn test_available_categories_dedup_in_order() {
        let store = loaded().await;
        assert_eq!(
            store.available_categories(),
            vec!["person", "event", "Landmark", "food"]
        );
    }

    #[tokio::test]
    async fn test_available_countries_first_seen_wins() {
        let store = loaded().await;
        let countries = store.available_countries();
        let names: Vec<_> = countries.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["United States", "Germany", "Japan"]);
        assert_eq!(countries[1].flag, "🇩🇪");
    }

    #[tokio::test]
    async fn test_random_cards() {
        let store = loaded().await;
        let mut rng = StdRng::seed_from_u64(99);

        let sample = store.random_with(2, &mut rng);
        assert_eq!(sample.len(), 2);
        assert_ne!(sample[0].id, sample[1].id);
        assert_eq!(store.random_with(50, &mut rng).len(), 5);
    }

    #[test]
    fn test_accessors_before_load() {
        let store = CardStore::new();
        assert!(store.all().is_empty());
        assert!(store.by_id("us-001").is_none());
        assert!(store.by_country("US").is_empty());
        assert!(store.available_categories().is_empty());
        assert!(store.available_countries().is_empty());
        assert!(store.random(3).is_empty());
    }
}
