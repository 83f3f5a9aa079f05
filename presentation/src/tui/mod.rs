//! TUI (Text User Interface) module for slap-the-world
//!
//! A terminal rendition of the game page: country picker on the left,
//! card drawer on the right, built on ratatui.

mod app;
mod keys;
mod state;
mod widgets;

pub use app::GameApp;
pub use keys::{Action, KeyHandler};
pub use state::TuiState;
pub use widgets::MainLayout;
