//! Test doubles shared by store, renderer and use-case tests

use crate::ports::dataset_source::{DatasetResponse, DatasetSource, LoadError};
use crate::ports::render_surface::RenderSurface;
use crate::ports::session_storage::SessionStorage;
use async_trait::async_trait;
use slapworld_domain::{DEFAULT_CARD_TEMPLATE_ID, Element, SelectOption, default_card_template, target};
use std::cell::Cell;
use std::collections::{HashMap, HashSet};

/// Serves canned bodies by resource name; anything else is a 404.
#[derive(Default)]
pub struct StaticSource {
    bodies: HashMap<String, String>,
    failures: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resource: &str, body: &str) -> Self {
        self.bodies.insert(resource.to_string(), body.to_string());
        self
    }

    pub fn failing(mut self, resource: &str, message: &str) -> Self {
        self.failures.insert(resource.to_string(), message.to_string());
        self
    }
}

#[async_trait]
impl DatasetSource for StaticSource {
    async fn fetch(&self, resource: &str) -> Result<DatasetResponse, LoadError> {
        if let Some(message) = self.failures.get(resource) {
            return Err(LoadError::transport(resource, message));
        }
        Ok(match self.bodies.get(resource) {
            Some(body) => DatasetResponse::ok(body.as_bytes()),
            None => DatasetResponse::not_found(),
        })
    }
}

pub const COUNTRIES_JSON: &str = r#"[
    {"name": "United States", "flag": "🇺🇸", "iso": "US", "population": 331000000, "gdp": 25460, "area": 9833520, "capital": "Washington, D.C.", "region": "Americas"},
    {"name": "France", "flag": "🇫🇷", "iso": "FR", "population": 68000000, "gdp": 2780, "area": 643801, "capital": "Paris", "region": "Europe"},
    {"name": "Germany", "flag": "🇩🇪", "iso": "DE", "population": 83200000, "gdp": 4070, "area": 357022, "capital": "Berlin", "region": "Europe"},
    {"name": "Japan", "flag": "🇯🇵", "iso": "JP", "population": 125700000, "area": 377975, "capital": "Tokyo", "region": "Asia"}
]"#;

pub const CARDS_JSON: &str = r#"[
    {"id": "us-001", "country": {"name": "United States", "flag": "🇺🇸", "iso": "US"}, "title": "Elon Musk", "description": "Tech billionaire", "imageUrl": "https://example.com/musk.jpg", "category": "person"},
    {"id": "us-002", "country": {"name": "United States", "flag": "🇺🇸", "iso": "us"}, "title": "Black Friday", "description": "Shopping frenzy", "imageUrl": "https://example.com/bf.jpg", "category": "event"},
    {"id": "de-001", "country": {"name": "Germany", "flag": "🇩🇪", "iso": "DE"}, "title": "Autobahn", "description": "No speed limit", "imageUrl": "https://example.com/autobahn.jpg", "category": "Landmark", "slapCount": 4200},
    {"id": "jp-001", "country": {"name": "Japan", "flag": "🇯🇵", "iso": "JP"}, "title": "Natto", "description": "Sticky beans", "imageUrl": "", "category": "food"},
    {"id": "de-002", "country": {"name": "Deutschland", "flag": "🏴", "iso": "DE"}, "title": "Bureaucracy", "description": "Forms in triplicate", "imageUrl": "https://example.com/forms.jpg", "category": "person"}
]"#;

/// Surface double that records every command it receives.
pub struct RecordingSurface {
    pub templates: HashMap<String, Element>,
    pub containers: HashMap<String, Vec<Element>>,
    pub texts: HashMap<String, String>,
    pub options: HashMap<String, Vec<SelectOption>>,
    pub visible: HashMap<String, bool>,
    pub broken_images: HashSet<String>,
    pub template_lookups: Cell<usize>,
}

impl RecordingSurface {
    /// Surface with the stock card template and a `card-list` container
    pub fn new() -> Self {
        let mut templates = HashMap::new();
        templates.insert(DEFAULT_CARD_TEMPLATE_ID.to_string(), default_card_template());
        let mut containers = HashMap::new();
        containers.insert(target::CARD_LIST.to_string(), Vec::new());

        Self {
            templates,
            containers,
            texts: HashMap::new(),
            options: HashMap::new(),
            visible: HashMap::new(),
            broken_images: HashSet::new(),
            template_lookups: Cell::new(0),
        }
    }

    pub fn without_templates(mut self) -> Self {
        self.templates.clear();
        self
    }

    pub fn with_template(mut self, id: &str, template: Element) -> Self {
        self.templates.insert(id.to_string(), template);
        self
    }

    pub fn with_broken_image(mut self, url: &str) -> Self {
        self.broken_images.insert(url.to_string());
        self
    }

    pub fn children(&self, container: &str) -> &[Element] {
        self.containers
            .get(container)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_visible(&self, target: &str) -> bool {
        self.visible.get(target).copied().unwrap_or(false)
    }
}

impl RenderSurface for RecordingSurface {
    fn template(&self, template_id: &str) -> Option<Element> {
        self.template_lookups.set(self.template_lookups.get() + 1);
        self.templates.get(template_id).cloned()
    }

    fn has_container(&self, container: &str) -> bool {
        self.containers.contains_key(container)
    }

    fn append(&mut self, container: &str, element: Element) -> bool {
        match self.containers.get_mut(container) {
            Some(children) => {
                children.push(element);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self, container: &str) {
        if let Some(children) = self.containers.get_mut(container) {
            children.clear();
        }
    }

    fn set_text(&mut self, target: &str, text: &str) {
        self.texts.insert(target.to_string(), text.to_string());
    }

    fn set_options(&mut self, target: &str, options: Vec<SelectOption>) {
        self.options.insert(target.to_string(), options);
    }

    fn set_visible(&mut self, target: &str, visible: bool) {
        self.visible.insert(target.to_string(), visible);
    }

    fn image_available(&self, url: &str) -> bool {
        !self.broken_images.contains(url)
    }
}

/// Session storage double backed by a map
#[derive(Default)]
pub struct MapStorage {
    values: std::sync::Mutex<HashMap<String, String>>,
}

impl SessionStorage for MapStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}
