//! Drawer state machine
//!
//! ```text
//!            select(iso)                 select(other)
//!  Closed ───────────────▶ Open(iso) ──────────────────▶ Open(other)
//!     ▲                        │
//!     └──────── close ─────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Visibility of the card drawer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawerState {
    #[default]
    Closed,
    Open {
        /// ISO code of the country whose cards are shown
        iso: String,
    },
}

impl DrawerState {
    /// Transition for a country selection. Selecting while already open
    /// re-targets the drawer without passing through `Closed`.
    pub fn select(&self, iso: impl Into<String>) -> Self {
        DrawerState::Open { iso: iso.into() }
    }

    pub fn close(&self) -> Self {
        DrawerState::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DrawerState::Open { .. })
    }

    pub fn selected_iso(&self) -> Option<&str> {
        match self {
            DrawerState::Open { iso } => Some(iso),
            DrawerState::Closed => None,
        }
    }
}
