//! Application layer for slap-the-world
//!
//! This crate contains the dataset stores, the card renderer, use cases,
//! port definitions, and application configuration. It depends only on
//! the domain layer; every display and transport concern sits behind a
//! port.

pub mod config;
pub mod ports;
pub mod render;
pub mod stores;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::GameConfig;
pub use ports::{
    dataset_source::{DatasetResponse, DatasetSource, LoadError},
    render_surface::RenderSurface,
    session_storage::SessionStorage,
    ui_event::UiEvent,
};
pub use render::card_renderer::{CardRenderer, DEFAULT_PLACEHOLDER_IMAGE, RenderError};
pub use stores::{
    card_store::{CARDS_RESOURCE, CardStore},
    country_store::{COUNTRIES_RESOURCE, CountryStore},
    dataset::DatasetStore,
};
pub use use_cases::game_controller::{EventOutcome, GameController, Selection};
pub use use_cases::load_datasets::{LoadDatasetsInput, LoadDatasetsUseCase, LoadedDatasets};
pub use use_cases::player_name::{PLAYER_NAME_KEY, PlayerNameUseCase};
