//! Card category value object

use serde::{Deserialize, Serialize};

/// Category of a card.
///
/// The dataset treats categories as an open set; the well-known ones get
/// their own variant and anything else is carried through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardCategory {
    Person,
    Event,
    Landmark,
    Organization,
    Food,
    Other(String),
}

impl CardCategory {
    pub fn as_str(&self) -> &str {
        match self {
            CardCategory::Person => "person",
            CardCategory::Event => "event",
            CardCategory::Landmark => "landmark",
            CardCategory::Organization => "organization",
            CardCategory::Food => "food",
            CardCategory::Other(s) => s,
        }
    }

    /// Badge glyph shown next to the category label
    pub fn icon(&self) -> &'static str {
        match self {
            CardCategory::Person => "👤",
            CardCategory::Event => "📅",
            CardCategory::Landmark => "🏛",
            CardCategory::Organization => "🏢",
            CardCategory::Food => "🍽",
            CardCategory::Other(_) => "•",
        }
    }
}

impl From<&str> for CardCategory {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "person" => CardCategory::Person,
            "event" => CardCategory::Event,
            "landmark" => CardCategory::Landmark,
            "organization" => CardCategory::Organization,
            "food" => CardCategory::Food,
            _ => CardCategory::Other(s.to_string()),
        }
    }
}

impl From<String> for CardCategory {
    fn from(s: String) -> Self {
        CardCategory::from(s.as_str())
    }
}

impl From<CardCategory> for String {
    fn from(category: CardCategory) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
