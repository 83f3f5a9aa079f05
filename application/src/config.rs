//! Application-level configuration.
//!
//! Values the use cases need at runtime. The infrastructure layer fills
//! this from configuration files; tests construct it directly.

use crate::render::card_renderer::DEFAULT_PLACEHOLDER_IMAGE;
use crate::stores::{card_store::CARDS_RESOURCE, country_store::COUNTRIES_RESOURCE};
use slapworld_domain::{CountryStat, DEFAULT_CARD_TEMPLATE_ID};

/// Game configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Title shown in the page heading
    pub game_name: String,
    pub version: String,
    /// How many countries a round draws
    pub max_countries: usize,
    /// Stats a round compares on
    pub stats: Vec<CountryStat>,
    /// Relative path of the country dataset
    pub countries_resource: String,
    /// Relative path of the card dataset
    pub cards_resource: String,
    /// Identifier of the card template on the surface
    pub card_template_id: String,
    /// Image used when a card image cannot be shown
    pub placeholder_image: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_name: "Slap The World Around".to_string(),
            version: "0.1.0".to_string(),
            max_countries: 2,
            stats: CountryStat::ALL.to_vec(),
            countries_resource: COUNTRIES_RESOURCE.to_string(),
            cards_resource: CARDS_RESOURCE.to_string(),
            card_template_id: DEFAULT_CARD_TEMPLATE_ID.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl GameConfig {
    pub fn with_game_name(mut self, name: impl Into<String>) -> Self {
        self.game_name = name.into();
        self
    }

    pub fn with_card_template_id(mut self, id: impl Into<String>) -> Self {
        self.card_template_id = id.into();
        self
    }

    pub fn with_placeholder_image(mut self, url: impl Into<String>) -> Self {
        self.placeholder_image = url.into();
        self
    }
}
