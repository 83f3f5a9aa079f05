//! In-memory terminal surface

use super::card_view::CardView;
use slapworld_application::RenderSurface;
use slapworld_domain::{
    DEFAULT_CARD_TEMPLATE_ID, Element, NO_CARDS_CLASS, SelectOption, default_card_template,
    target,
};
use std::collections::{BTreeMap, HashMap};

/// Whether a terminal can show `url` as an image link
pub fn is_displayable_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) => !rest.is_empty() && !rest.chars().any(char::is_whitespace),
        None => false,
    }
}

/// Retained-mode surface: keeps every element, text and option it is
/// given so a drawing pass (or a one-shot print) can read them back.
///
/// Targets are visible until hidden.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    templates: HashMap<String, Element>,
    containers: BTreeMap<String, Vec<Element>>,
    texts: HashMap<String, String>,
    options: HashMap<String, Vec<SelectOption>>,
    visible: HashMap<String, bool>,
}

impl TerminalSurface {
    /// Surface with the built-in card template and a card list
    pub fn new() -> Self {
        Self::with_card_template(DEFAULT_CARD_TEMPLATE_ID)
    }

    /// Like [`TerminalSurface::new`], with the built-in template registered
    /// under `template_id`
    pub fn with_card_template(template_id: &str) -> Self {
        Self::empty()
            .with_template(template_id, default_card_template())
            .with_container(target::CARD_LIST)
    }

    /// Surface with no templates and no containers
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
            containers: BTreeMap::new(),
            texts: HashMap::new(),
            options: HashMap::new(),
            visible: HashMap::new(),
        }
    }

    pub fn with_template(mut self, id: impl Into<String>, template: Element) -> Self {
        self.templates.insert(id.into(), template);
        self
    }

    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.entry(id.into()).or_default();
        self
    }

    pub fn text(&self, target: &str) -> Option<&str> {
        self.texts.get(target).map(String::as_str)
    }

    pub fn options(&self, target: &str) -> &[SelectOption] {
        self.options.get(target).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_visible(&self, target: &str) -> bool {
        self.visible.get(target).copied().unwrap_or(true)
    }

    pub fn children(&self, container: &str) -> &[Element] {
        self.containers
            .get(container)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Cards currently in the card list, in display order
    pub fn cards(&self) -> Vec<CardView> {
        self.children(target::CARD_LIST)
            .iter()
            .filter_map(CardView::from_element)
            .collect()
    }

    /// The "no cards" message, if the card list shows one
    pub fn notice(&self) -> Option<String> {
        self.children(target::CARD_LIST)
            .iter()
            .find(|el| el.has_class(NO_CARDS_CLASS))
            .map(Element::text_content)
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for TerminalSurface {
    fn template(&self, template_id: &str) -> Option<Element> {
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
        is_displayable_url(url)
    }
}
