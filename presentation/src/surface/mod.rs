//! Display surfaces
//!
//! [`TerminalSurface`] is the in-memory surface both the one-shot commands
//! and the interactive UI render into; [`CardView`] reads a rendered card
//! element back into plain fields for drawing.

mod card_view;
mod terminal;

pub use card_view::CardView;
pub use terminal::{TerminalSurface, is_displayable_url};
