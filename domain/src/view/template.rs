//! Built-in card template

use super::element::Element;
use super::slot::{CARD_ROOT_CLASS, CardSlot};

/// Identifier the built-in card template is registered under
pub const DEFAULT_CARD_TEMPLATE_ID: &str = "card-template";

/// The stock card layout: header (flag, country), image, body (title,
/// category, description) and the slap actions.
///
/// Returned as a fragment so that, like a document template, the card
/// root has to be located by its marker class.
pub fn default_card_template() -> Element {
    let slot = |tag: &str, slot: CardSlot| Element::new(tag).with_class(slot.class_name());

    let card = Element::new("article")
        .with_class(CARD_ROOT_CLASS)
        .with_child(
            Element::new("header")
                .with_class("card-header")
                .with_child(slot("span", CardSlot::Flag))
                .with_child(slot("span", CardSlot::CountryName)),
        )
        .with_child(slot("img", CardSlot::Image))
        .with_child(
            Element::new("div")
                .with_class("card-body")
                .with_child(slot("h3", CardSlot::Title))
                .with_child(slot("span", CardSlot::Category))
                .with_child(slot("p", CardSlot::Description)),
        )
        .with_child(
            Element::new("footer")
                .with_class("card-actions")
                .with_child(slot("button", CardSlot::SlapButton).with_text("Slap!"))
                .with_child(slot("span", CardSlot::SlapCount)),
        );

    Element::new("fragment").with_child(card)
}
