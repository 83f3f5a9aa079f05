//! Card entity as found in `cards.json`

use super::category::CardCategory;
use serde::{Deserialize, Deserializer, Serialize};

/// Country reference embedded in every card.
///
/// This is a copy of the country's display fields, not a foreign key:
/// nothing checks that `iso` exists in the country dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCountry {
    pub name: String,
    #[serde(default)]
    pub flag: String,
    pub iso: String,
}

impl CardCountry {
    pub fn new(name: impl Into<String>, flag: impl Into<String>, iso: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flag: flag.into(),
            iso: iso.into(),
        }
    }

    /// Label used by pickers and drawer titles: `"{flag} {name}"`
    pub fn label(&self) -> String {
        if self.flag.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.flag, self.name)
        }
    }
}

/// A single slapable unit of content tied to one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique token, e.g. `us-001`
    pub id: String,
    pub country: CardCountry,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    /// Open enum: person, event, landmark, organization, food, ...
    pub category: String,
    /// Display counter; `null`, negative and fractional values are tolerated
    #[serde(default, deserialize_with = "slap_count_from_number")]
    pub slap_count: u64,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        country: CardCountry,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            country,
            title: title.into(),
            description: String::new(),
            image_url: String::new(),
            category: category.into(),
            slap_count: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn with_slap_count(mut self, count: u64) -> Self {
        self.slap_count = count;
        self
    }

    pub fn category_kind(&self) -> CardCategory {
        CardCategory::from(self.category.as_str())
    }

    pub fn belongs_to(&self, iso: &str) -> bool {
        self.country.iso.eq_ignore_ascii_case(iso)
    }
}

/// Any JSON number (or `null`) as a non-negative whole count
fn slap_count_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(match value {
        Some(n) if n.is_finite() && n > 0.0 => n.round() as u64,
        _ => 0,
    })
}
