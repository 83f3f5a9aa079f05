//! Presentation layer for slap-the-world
//!
//! This crate contains CLI definitions, the terminal render surface,
//! output formatters, the loading spinner, and the interactive drawer UI.

pub mod cli;
pub mod output;
pub mod progress;
pub mod surface;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::LoadingSpinner;
pub use surface::{CardView, TerminalSurface, is_displayable_url};
pub use tui::GameApp;
