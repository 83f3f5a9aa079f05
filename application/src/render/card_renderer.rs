//! Card renderer
//!
//! Projects a [`Card`] onto a copy of the card template: the root marked
//! `slap-card` is located in the template, every known slot found under
//! it is filled, and the result is appended to a container on the surface.
//!
//! Failures (missing container, missing template, template without a card
//! root) are logged and produce `None`; they never abort a batch.

use crate::ports::render_surface::RenderSurface;
use slapworld_domain::util::format_thousands;
use slapworld_domain::{CARD_ROOT_CLASS, Card, CardSlot, Element};
use thiserror::Error;
use tracing::{debug, error};

/// Placeholder shown when a card image cannot be loaded
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200x150?text=No+Image";

/// Reasons a single card could not be rendered
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Container element \"{0}\" not found")]
    ContainerMissing(String),

    #[error("Template with id \"{0}\" not found")]
    TemplateMissing(String),

    #[error("Template \"{0}\" must contain an element with class \"slap-card\"")]
    CardRootMissing(String),
}

/// Renders cards from a named template.
///
/// The template is resolved on first use and cached; while the surface
/// has no such template every render attempt looks it up again and fails
/// with [`RenderError::TemplateMissing`].
#[derive(Debug, Clone)]
pub struct CardRenderer {
    template_id: String,
    placeholder_image: String,
    template: Option<Element>,
}

impl CardRenderer {
    pub fn new(template_id: impl Into<String>, placeholder_image: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            placeholder_image: placeholder_image.into(),
            template: None,
        }
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    fn load_template(&mut self, surface: &dyn RenderSurface) -> Result<&Element, RenderError> {
        if self.template.is_none() {
            let template = surface
                .template(&self.template_id)
                .ok_or_else(|| RenderError::TemplateMissing(self.template_id.clone()))?;
            debug!("CardRenderer: loaded template \"{}\"", self.template_id);
            self.template = Some(template);
        }
        self.template
            .as_ref()
            .ok_or_else(|| RenderError::TemplateMissing(self.template_id.clone()))
    }

    /// Build a populated card element without attaching it anywhere
    pub fn create_card(
        &mut self,
        surface: &dyn RenderSurface,
        card: &Card,
    ) -> Result<Element, RenderError> {
        let fragment = self.load_template(surface)?.clone();
        let mut root = fragment
            .take_by_class(CARD_ROOT_CLASS)
            .ok_or_else(|| RenderError::CardRootMissing(self.template_id.clone()))?;

        root.set_attribute("data-card-id", &card.id);
        root.set_attribute("data-country", &card.country.iso);

        if let Some(el) = root.find_by_class_mut(CardSlot::Flag.class_name()) {
            el.set_text(&card.country.flag);
        }
        if let Some(el) = root.find_by_class_mut(CardSlot::CountryName.class_name()) {
            el.set_text(&card.country.name);
        }
        if let Some(el) = root.find_by_class_mut(CardSlot::Image.class_name()) {
            let src = if !card.image_url.is_empty() && surface.image_available(&card.image_url) {
                card.image_url.as_str()
            } else {
                debug!("CardRenderer: image for \"{}\" unavailable, using placeholder", card.id);
                self.placeholder_image.as_str()
            };
            el.set_attribute("src", src);
            el.set_attribute("alt", &card.title);
            el.set_attribute("data-fallback-src", &self.placeholder_image);
        }
        if let Some(el) = root.find_by_class_mut(CardSlot::Title.class_name()) {
            el.set_text(&card.title);
        }
        if let Some(el) = root.find_by_class_mut(CardSlot::Category.class_name()) {
            el.set_text(&card.category);
        }
        if let Some(el) = root.find_by_class_mut(CardSlot::Description.class_name()) {
            el.set_text(&card.description);
        }
        if let Some(el) = root.find_by_class_mut(CardSlot::SlapButton.class_name()) {
            el.set_attribute("data-card-id", &card.id);
        }
        if let Some(el) = root.find_by_class_mut(CardSlot::SlapCount.class_name()) {
            el.set_text(format!("🔥 {} slaps", format_thousands(card.slap_count)));
        }

        Ok(root)
    }

    /// Render one card into `container`, reporting why it failed
    pub fn try_render(
        &mut self,
        surface: &mut dyn RenderSurface,
        card: &Card,
        container: &str,
    ) -> Result<Element, RenderError> {
        if !surface.has_container(container) {
            return Err(RenderError::ContainerMissing(container.to_string()));
        }

        let element = self.create_card(&*surface, card)?;
        if !surface.append(container, element.clone()) {
            return Err(RenderError::ContainerMissing(container.to_string()));
        }

        debug!("CardRenderer: rendered card \"{}\"", card.title);
        Ok(element)
    }

    /// Render one card into `container`; failures are logged and yield `None`
    pub fn render(
        &mut self,
        surface: &mut dyn RenderSurface,
        card: &Card,
        container: &str,
    ) -> Option<Element> {
        match self.try_render(surface, card, container) {
            Ok(element) => Some(element),
            Err(e) => {
                error!("CardRenderer: {}", e);
                None
            }
        }
    }

    /// Render every card in order. The result has one entry per card,
    /// `None` where that card failed.
    pub fn render_many<'a, I>(
        &mut self,
        surface: &mut dyn RenderSurface,
        cards: I,
        container: &str,
    ) -> Vec<Option<Element>>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        cards
            .into_iter()
            .map(|card| self.render(&mut *surface, card, container))
            .collect()
    }

    /// Remove every rendered card from `container`
    pub fn clear(&self, surface: &mut dyn RenderSurface, container: &str) {
        if surface.has_container(container) {
            surface.clear(container);
            debug!("CardRenderer: cleared all cards from \"{}\"", container);
        }
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(slapworld_domain::DEFAULT_CARD_TEMPLATE_ID, DEFAULT_PLACEHOLDER_IMAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingSurface;
    use slapworld_domain::{CardCountry, target};

    fn musk() -> Card {
        Card::new(
            "us-001",
            CardCountry::new("United States", "🇺🇸", "US"),
            "Elon Musk",
            "person",
        )
        .with_description("Tech billionaire")
        .with_image_url("https://example.com/musk.jpg")
        .with_slap_count(1234567)
    }

    fn slot_text<'a>(el: &'a Element, slot: CardSlot) -> Option<&'a str> {
        el.find_by_class(slot.class_name())?.text.as_deref()
    }

    #[test]
    fn test_render_fills_every_slot() {
        let mut surface = RecordingSurface::new();
        let mut renderer = CardRenderer::default();

        let el = renderer
            .render(&mut surface, &musk(), target::CARD_LIST)
            .unwrap();

        assert!(el.has_class(CARD_ROOT_CLASS));
        assert_eq!(el.attribute("data-card-id"), Some("us-001"));
        assert_eq!(el.attribute("data-country"), Some("US"));
        assert_eq!(slot_text(&el, CardSlot::Flag), Some("🇺🇸"));
        assert_eq!(slot_text(&el, CardSlot::CountryName), Some("United States"));
        assert_eq!(slot_text(&el, CardSlot::Title), Some("Elon Musk"));
        assert_eq!(slot_text(&el, CardSlot::Category), Some("person"));
        assert_eq!(slot_text(&el, CardSlot::Description), Some("Tech billionaire"));
        assert_eq!(slot_text(&el, CardSlot::SlapCount), Some("🔥 1,234,567 slaps"));

        let button = el.find_by_class(CardSlot::SlapButton.class_name()).unwrap();
        assert_eq!(button.attribute("data-card-id"), Some("us-001"));

        let image = el.find_by_class(CardSlot::Image.class_name()).unwrap();
        assert_eq!(image.attribute("src"), Some("https://example.com/musk.jpg"));
        assert_eq!(image.attribute("alt"), Some("Elon Musk"));

        assert_eq!(surface.children(target::CARD_LIST), &[el]);
    }

    #[test]
    fn test_broken_image_uses_placeholder() {
        let mut surface = RecordingSurface::new().with_broken_image("https://example.com/musk.jpg");
        let mut renderer = CardRenderer::new("card-template", "placeholder.png");

        let el = renderer
            .render(&mut surface, &musk(), target::CARD_LIST)
            .unwrap();

        let image = el.find_by_class(CardSlot::Image.class_name()).unwrap();
        assert_eq!(image.attribute("src"), Some("placeholder.png"));
        assert_eq!(image.attribute("data-fallback-src"), Some("placeholder.png"));
    }

    #[test]
    fn test_empty_image_url_uses_placeholder() {
        let mut surface = RecordingSurface::new();
        let mut renderer = CardRenderer::default();
        let card = musk().with_image_url("");

        let el = renderer
            .render(&mut surface, &card, target::CARD_LIST)
            .unwrap();

        let image = el.find_by_class(CardSlot::Image.class_name()).unwrap();
        assert_eq!(image.attribute("src"), Some(DEFAULT_PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_missing_template_returns_none_every_time() {
        let mut surface = RecordingSurface::new().without_templates();
        let mut renderer = CardRenderer::default();

        assert!(renderer.render(&mut surface, &musk(), target::CARD_LIST).is_none());
        assert_eq!(
            renderer.try_render(&mut surface, &musk(), target::CARD_LIST),
            Err(RenderError::TemplateMissing("card-template".to_string()))
        );
        assert_eq!(surface.template_lookups.get(), 2);
        assert!(surface.children(target::CARD_LIST).is_empty());
    }

    #[test]
    fn test_template_is_resolved_once() {
        let mut surface = RecordingSurface::new();
        let mut renderer = CardRenderer::default();

        renderer.render(&mut surface, &musk(), target::CARD_LIST);
        renderer.render(&mut surface, &musk(), target::CARD_LIST);

        assert_eq!(surface.template_lookups.get(), 1);
        assert_eq!(surface.children(target::CARD_LIST).len(), 2);
    }

    #[test]
    fn test_missing_container() {
        let mut surface = RecordingSurface::new();
        let mut renderer = CardRenderer::default();

        assert_eq!(
            renderer.try_render(&mut surface, &musk(), "nowhere"),
            Err(RenderError::ContainerMissing("nowhere".to_string()))
        );
        assert!(renderer.render(&mut surface, &musk(), "nowhere").is_none());
    }

    #[test]
    fn test_template_without_card_root() {
        let template = Element::new("fragment").with_child(Element::new("div").with_class("card-title"));
        let mut surface = RecordingSurface::new().with_template("card-template", template);
        let mut renderer = CardRenderer::default();

        assert_eq!(
            renderer.try_render(&mut surface, &musk(), target::CARD_LIST),
            Err(RenderError::CardRootMissing("card-template".to_string()))
        );
    }

    #[test]
    fn test_missing_slots_are_skipped() {
        let template = Element::new("fragment").with_child(
            Element::new("div")
                .with_class(CARD_ROOT_CLASS)
                .with_child(Element::new("h3").with_class("card-title")),
        );
        let mut surface = RecordingSurface::new().with_template("card-template", template);
        let mut renderer = CardRenderer::default();

        let el = renderer
            .render(&mut surface, &musk(), target::CARD_LIST)
            .unwrap();

        assert_eq!(el.text_content(), "Elon Musk");
    }

    #[test]
    fn test_render_many_keeps_going_after_failure() {
        let mut surface = RecordingSurface::new();
        let mut renderer = CardRenderer::default();
        let second = Card::new("fr-001", CardCountry::new("France", "🇫🇷", "FR"), "Baguette", "food");
        let cards = [musk(), second];

        let rendered = renderer.render_many(&mut surface, &cards, target::CARD_LIST);
        assert_eq!(rendered.len(), 2);
        assert!(rendered.iter().all(Option::is_some));

        let failed = renderer.render_many(&mut surface, &cards, "nowhere");
        assert_eq!(failed, vec![None, None]);
    }

    #[test]
    fn test_clear() {
        let mut surface = RecordingSurface::new();
        let mut renderer = CardRenderer::default();
        renderer.render(&mut surface, &musk(), target::CARD_LIST);

        renderer.clear(&mut surface, target::CARD_LIST);
        renderer.clear(&mut surface, "nowhere");

        assert!(surface.children(target::CARD_LIST).is_empty());
    }
}
