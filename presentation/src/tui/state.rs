//! TUI application state
//!
//! Single source of truth for everything the TUI renders. The surface is
//! written by the game controller; the cursors and flash line are
//! written by the key handler.

use crate::surface::{CardView, TerminalSurface};
use slapworld_domain::{SelectOption, target};
use std::time::{Duration, Instant};

/// Central TUI state, owned by the GameApp select! loop
pub struct TuiState {
    pub surface: TerminalSurface,

    // -- Cursors --
    /// Highlighted row of the country picker
    pub picker_cursor: usize,
    /// Highlighted card in the drawer
    pub card_cursor: usize,

    // -- Session --
    pub player: String,
    pub version: String,

    // -- Overlay --
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(surface: TerminalSurface, player: impl Into<String>) -> Self {
        Self {
            surface,
            picker_cursor: 0,
            card_cursor: 0,
            player: player.into(),
            version: String::new(),
            show_help: false,
            flash_message: None,
            should_quit: false,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    // -- Picker --

    pub fn options(&self) -> &[SelectOption] {
        self.surface.options(target::COUNTRY_SELECT)
    }

    pub fn highlighted_option(&self) -> Option<&SelectOption> {
        self.options().get(self.picker_cursor)
    }

    pub fn picker_up(&mut self) {
        self.picker_cursor = self.picker_cursor.saturating_sub(1);
    }

    pub fn picker_down(&mut self) {
        let last = self.options().len().saturating_sub(1);
        self.picker_cursor = (self.picker_cursor + 1).min(last);
    }

    /// Move the picker to `iso`, e.g. after a map click
    pub fn focus_option(&mut self, iso: &str) {
        if let Some(pos) = self
            .options()
            .iter()
            .position(|o| o.value.eq_ignore_ascii_case(iso))
        {
            self.picker_cursor = pos;
        }
    }

    // -- Drawer --

    pub fn drawer_open(&self) -> bool {
        self.surface.is_visible(target::DRAWER)
    }

    pub fn cards(&self) -> Vec<CardView> {
        self.surface.cards()
    }

    pub fn highlighted_card(&self) -> Option<CardView> {
        self.cards().into_iter().nth(self.card_cursor)
    }

    pub fn card_next(&mut self) {
        let last = self.cards().len().saturating_sub(1);
        self.card_cursor = (self.card_cursor + 1).min(last);
    }

    pub fn card_prev(&mut self) {
        self.card_cursor = self.card_cursor.saturating_sub(1);
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}
