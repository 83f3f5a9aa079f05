//! Key bindings
//!
//! Maps crossterm key events to game actions. There is a single mode;
//! the help overlay is handled by the app before keys reach here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the picker up
    PickerUp,
    /// Move the picker down
    PickerDown,
    /// Select the highlighted country (dropdown change)
    Select,
    /// Select a random country (map click)
    RandomCountry,
    /// Close the drawer
    CloseDrawer,
    /// Highlight the next card
    NextCard,
    /// Highlight the previous card
    PrevCard,
    /// Slap the highlighted card
    Slap,
    /// Toggle the help overlay
    ToggleHelp,
    Quit,
    /// No action
    None,
}

/// Key event handler
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            // Quit
            (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

            // Picker
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::PickerUp,
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::PickerDown,
            (KeyCode::Enter, _) => Action::Select,
            (KeyCode::Char('m'), KeyModifiers::NONE) => Action::RandomCountry,

            // Drawer
            (KeyCode::Esc, _) => Action::CloseDrawer,
            (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) | (KeyCode::Tab, _) => {
                Action::NextCard
            }
            (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) | (KeyCode::BackTab, _) => {
                Action::PrevCard
            }
            (KeyCode::Char('s'), KeyModifiers::NONE) | (KeyCode::Char(' '), _) => Action::Slap,

            // Help
            (KeyCode::Char('?'), _) => Action::ToggleHelp,

            _ => Action::None,
        }
    }
}
