//! UI events consumed by the game controller
//!
//! These events form the input port from the presentation layer to the
//! application layer. Surfaces translate their native input (key presses,
//! clicks) into these.

/// User interactions the controller reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The country picker changed to the given ISO code
    CountrySelected(String),
    /// A country was picked on the map
    MapClicked(String),
    /// The drawer's close control was used
    DrawerClosed,
    /// The slap button of a card was pressed
    Slapped(String),
}
