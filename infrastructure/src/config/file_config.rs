//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use serde::{Deserialize, Serialize};
use slapworld_application::{CARDS_RESOURCE, COUNTRIES_RESOURCE, DEFAULT_PLACEHOLDER_IMAGE, GameConfig};
use slapworld_domain::{CountryStat, DEFAULT_CARD_TEMPLATE_ID};
use thiserror::Error;

/// Data directory used when nothing else is configured
pub const DEFAULT_DATA_BASE: &str = "data";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("game.max_countries cannot be 0")]
    ZeroMaxCountries,

    #[error("render.card_template_id cannot be empty")]
    EmptyTemplateId,

    #[error("data.{0} cannot be empty")]
    EmptyResource(&'static str),
}

/// Raw game configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Title shown in the page heading
    pub name: String,
    pub version: String,
    pub max_countries: usize,
    /// Stats compared in a round (`population`, `gdp`, `area`)
    pub stats: Vec<CountryStat>,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        let defaults = GameConfig::default();
        Self {
            name: defaults.game_name,
            version: defaults.version,
            max_countries: defaults.max_countries,
            stats: defaults.stats,
        }
    }
}

/// Raw dataset location configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDataConfig {
    /// Directory or `http(s)://` base the datasets are resolved against
    pub base: String,
    pub countries: String,
    pub cards: String,
}

impl Default for FileDataConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_DATA_BASE.to_string(),
            countries: COUNTRIES_RESOURCE.to_string(),
            cards: CARDS_RESOURCE.to_string(),
        }
    }
}

/// Raw rendering configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRenderConfig {
    pub card_template_id: String,
    pub placeholder_image: String,
}

impl Default for FileRenderConfig {
    fn default() -> Self {
        Self {
            card_template_id: DEFAULT_CARD_TEMPLATE_ID.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Complete file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub game: FileGameConfig,
    pub data: FileDataConfig,
    pub render: FileRenderConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.game.max_countries == 0 {
            return Err(ConfigValidationError::ZeroMaxCountries);
        }
        if self.render.card_template_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyTemplateId);
        }
        if self.data.countries.trim().is_empty() {
            return Err(ConfigValidationError::EmptyResource("countries"));
        }
        if self.data.cards.trim().is_empty() {
            return Err(ConfigValidationError::EmptyResource("cards"));
        }
        Ok(())
    }

    /// Convert to the application-level game configuration
    pub fn to_game_config(&self) -> GameConfig {
        GameConfig {
            game_name: self.game.name.clone(),
            version: self.game.version.clone(),
            max_countries: self.game.max_countries,
            stats: self.game.stats.clone(),
            countries_resource: self.data.countries.clone(),
            cards_resource: self.data.cards.clone(),
            card_template_id: self.render.card_template_id.clone(),
            placeholder_image: self.render.placeholder_image.clone(),
        }
    }
}
