//! Domain layer for slap-the-world
//!
//! This crate contains the game's entities and value objects. It has no
//! dependencies on I/O, display surfaces, or configuration files.
//!
//! # Core Concepts
//!
//! - **Country**: a playable country with comparable stats, keyed by ISO code
//! - **Card**: a slapable item (person, event, landmark, ...) tied to a country
//! - **Drawer**: the panel listing the cards of the selected country, modelled
//!   as a two-state machine
//! - **View elements**: the tree that card templates and rendered cards share

pub mod card;
pub mod core;
pub mod country;
pub mod drawer;
pub mod player;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use card::{
    category::CardCategory,
    entities::{Card, CardCountry},
};
pub use core::{error::DomainError, sample::random_sample};
pub use country::{entities::Country, stat::CountryStat};
pub use drawer::DrawerState;
pub use player::PlayerName;
pub use view::{
    SelectOption,
    element::Element,
    slot::{CARD_ROOT_CLASS, CardSlot, NO_CARDS_CLASS},
    target,
    template::{DEFAULT_CARD_TEMPLATE_ID, default_card_template},
};
