//! View model shared by the renderer and every display surface.
//!
//! Templates and rendered cards are plain [`Element`] trees. Surfaces own
//! their trees and decide how to draw them; the application layer only
//! ever talks to them through named targets.

pub mod element;
pub mod slot;
pub mod template;

use serde::{Deserialize, Serialize};

/// Named targets every surface is expected to provide.
pub mod target {
    pub const PAGE_TITLE: &str = "page-title";
    pub const COUNTRY_SELECT: &str = "country-select";
    pub const DRAWER: &str = "drawer";
    pub const DRAWER_TITLE: &str = "drawer-title";
    pub const CARD_LIST: &str = "card-list";
}

/// One entry of the country picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
