//! Rendered card, read back from its element tree

use serde::Serialize;
use slapworld_domain::{CARD_ROOT_CLASS, CardSlot, Element};

/// The slot contents of one rendered card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: String,
    pub flag: String,
    pub country: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub slaps: String,
}

impl CardView {
    /// Read a card element. Returns `None` for anything that is not a card
    /// root (e.g. the "no cards" message).
    pub fn from_element(element: &Element) -> Option<Self> {
        if !element.has_class(CARD_ROOT_CLASS) {
            return None;
        }

        let slot_text = |slot: CardSlot| {
            element
                .find_by_class(slot.class_name())
                .map(Element::text_content)
                .unwrap_or_default()
        };

        Some(Self {
            id: element.attribute("data-card-id").unwrap_or_default().to_string(),
            flag: slot_text(CardSlot::Flag),
            country: slot_text(CardSlot::CountryName),
            title: slot_text(CardSlot::Title),
            category: slot_text(CardSlot::Category),
            description: slot_text(CardSlot::Description),
            image: element
                .find_by_class(CardSlot::Image.class_name())
                .and_then(|img| img.attribute("src"))
                .unwrap_or_default()
                .to_string(),
            slaps: slot_text(CardSlot::SlapCount),
        })
    }
}
