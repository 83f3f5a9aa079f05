//! Card template slots

/// Marker class of the element a card template must contain
pub const CARD_ROOT_CLASS: &str = "slap-card";

/// Marker class of the "nothing to show" drawer message
pub const NO_CARDS_CLASS: &str = "no-cards";

/// A structurally identifiable slot inside a card template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardSlot {
    Flag,
    CountryName,
    Image,
    Title,
    Category,
    Description,
    SlapButton,
    SlapCount,
}

impl CardSlot {
    pub const ALL: [CardSlot; 8] = [
        CardSlot::Flag,
        CardSlot::CountryName,
        CardSlot::Image,
        CardSlot::Title,
        CardSlot::Category,
        CardSlot::Description,
        CardSlot::SlapButton,
        CardSlot::SlapCount,
    ];

    /// Class name that marks this slot in a template
    pub fn class_name(&self) -> &'static str {
        match self {
            CardSlot::Flag => "card-flag",
            CardSlot::CountryName => "card-country",
            CardSlot::Image => "card-image",
            CardSlot::Title => "card-title",
            CardSlot::Category => "card-category",
            CardSlot::Description => "card-description",
            CardSlot::SlapButton => "slap-btn",
            CardSlot::SlapCount => "slap-count",
        }
    }
}
