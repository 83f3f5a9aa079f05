//! Game controller
//!
//! Wires UI events to the two stores and the card renderer, and owns the
//! drawer state. Surfaces are passed per call so the controller never
//! holds on to a display.
//!
//! ```text
//! UiEvent ──▶ GameController::handle
//!               ├─ CountryStore / CardStore lookups
//!               ├─ CardRenderer (clear + repopulate card-list)
//!               └─ RenderSurface (drawer title, show / hide)
//! ```

use crate::config::GameConfig;
use crate::ports::render_surface::RenderSurface;
use crate::ports::ui_event::UiEvent;
use crate::render::card_renderer::CardRenderer;
use crate::stores::{card_store::CardStore, country_store::CountryStore};
use slapworld_domain::{DrawerState, Element, NO_CARDS_CLASS, SelectOption, target};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What a country selection put in the drawer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub iso: String,
    pub country_name: String,
    /// Ids of the cards that rendered, in display order
    pub rendered: Vec<String>,
    /// Whether the "no cards" message was shown instead of cards
    pub placeholder_shown: bool,
}

/// Result of handling one [`UiEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Selected(Selection),
    Closed,
    Slapped { card_id: String, title: String },
    /// The event referred to something unknown and changed nothing
    Ignored,
}

/// Orchestrates the picker, the stores and the drawer
pub struct GameController {
    countries: Arc<CountryStore>,
    cards: Arc<CardStore>,
    renderer: CardRenderer,
    config: GameConfig,
    state: DrawerState,
}

impl GameController {
    pub fn new(countries: Arc<CountryStore>, cards: Arc<CardStore>, config: GameConfig) -> Self {
        let renderer = CardRenderer::new(&config.card_template_id, &config.placeholder_image);
        Self {
            countries,
            cards,
            renderer,
            config,
            state: DrawerState::default(),
        }
    }

    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn countries(&self) -> &CountryStore {
        &self.countries
    }

    pub fn cards(&self) -> &CardStore {
        &self.cards
    }

    /// Set the heading, fill the country picker and start with the drawer hidden
    pub fn initialize(&mut self, surface: &mut dyn RenderSurface) {
        surface.set_text(target::PAGE_TITLE, &self.config.game_name);

        let options: Vec<SelectOption> = self
            .countries
            .all()
            .iter()
            .map(|c| SelectOption::new(&c.iso, c.label()))
            .collect();
        debug!("Populating country picker with {} options", options.len());
        surface.set_options(target::COUNTRY_SELECT, options);

        surface.set_visible(target::DRAWER, false);
        self.state = DrawerState::Closed;
    }

    pub fn handle(&mut self, surface: &mut dyn RenderSurface, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::CountrySelected(iso) | UiEvent::MapClicked(iso) => {
                match self.open_drawer(surface, &iso) {
                    Some(selection) => EventOutcome::Selected(selection),
                    None => EventOutcome::Ignored,
                }
            }
            UiEvent::DrawerClosed => {
                self.close_drawer(surface);
                EventOutcome::Closed
            }
            UiEvent::Slapped(card_id) => match self.cards.by_id(&card_id) {
                Some(card) => {
                    info!("Slapped {} ({})", card.title, card.id);
                    EventOutcome::Slapped {
                        card_id: card.id.clone(),
                        title: card.title.clone(),
                    }
                }
                None => {
                    warn!("Slap on unknown card {}", card_id);
                    EventOutcome::Ignored
                }
            },
        }
    }

    fn open_drawer(&mut self, surface: &mut dyn RenderSurface, iso: &str) -> Option<Selection> {
        // The card dataset embeds its own copy of the country, so a country
        // missing from countries.json can still be shown.
        let (iso, name, label) = if let Some(country) = self.countries.by_iso(iso) {
            (country.iso.clone(), country.name.clone(), country.label())
        } else if let Some(country) = self
            .cards
            .available_countries()
            .into_iter()
            .find(|c| c.iso.eq_ignore_ascii_case(iso))
        {
            (country.iso.clone(), country.name.clone(), country.label())
        } else {
            warn!("Unknown country {}", iso);
            return None;
        };

        let cards = self.cards.by_country(&iso);
        debug!("Found {} cards for {}", cards.len(), iso);

        self.renderer.clear(surface, target::CARD_LIST);

        let placeholder_shown = cards.is_empty();
        let rendered: Vec<String> = if placeholder_shown {
            let message = Element::new("p")
                .with_class(NO_CARDS_CLASS)
                .with_text(format!("No slapable cards for {} yet.", name));
            surface.append(target::CARD_LIST, message);
            Vec::new()
        } else {
            self.renderer
                .render_many(surface, cards.iter().copied(), target::CARD_LIST)
                .into_iter()
                .flatten()
                .filter_map(|el| el.attribute("data-card-id").map(str::to_string))
                .collect()
        };

        surface.set_text(target::DRAWER_TITLE, &label);
        surface.set_visible(target::DRAWER, true);
        self.state = self.state.select(&iso);
        info!("Drawer open for {} with {} cards", name, rendered.len());

        Some(Selection {
            iso,
            country_name: name,
            rendered,
            placeholder_shown,
        })
    }

    fn close_drawer(&mut self, surface: &mut dyn RenderSurface) {
        surface.set_visible(target::DRAWER, false);
        self.state = self.state.close();
        debug!("Drawer closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingSurface;
    use slapworld_domain::{Card, CardCountry, Country};

    fn controller() -> GameController {
        let countries = CountryStore::from_countries(vec![
            Country::new("United States", "🇺🇸", "US").with_region("Americas"),
            Country::new("France", "🇫🇷", "FR").with_region("Europe"),
        ]);
        let cards = CardStore::from_cards(vec![Card::new(
            "us-001",
            CardCountry::new("United States", "🇺🇸", "US"),
            "Elon Musk",
            "person",
        )]);
        GameController::new(Arc::new(countries), Arc::new(cards), GameConfig::default())
    }

    fn selected(outcome: EventOutcome) -> Selection {
        match outcome {
            EventOutcome::Selected(selection) => selection,
            other => panic!("expected a selection, got {:?}", other),
        }
    }

    #[test]
    fn test_initialize_populates_picker() {
        let mut surface = RecordingSurface::new();
        let mut controller = controller();

        controller.initialize(&mut surface);

        assert_eq!(
            surface.texts.get(target::PAGE_TITLE).map(String::as_str),
            Some("Slap The World Around")
        );
        assert_eq!(
            surface.options[target::COUNTRY_SELECT],
            vec![
                SelectOption::new("US", "🇺🇸 United States"),
                SelectOption::new("FR", "🇫🇷 France"),
            ]
        );
        assert!(!surface.is_visible(target::DRAWER));
        assert_eq!(controller.state(), &DrawerState::Closed);
    }

    #[test]
    fn test_country_without_cards_shows_placeholder() {
        let mut surface = RecordingSurface::new();
        let mut controller = controller();
        controller.initialize(&mut surface);

        let selection = selected(
            controller.handle(&mut surface, UiEvent::CountrySelected("FR".to_string())),
        );

        assert!(selection.rendered.is_empty());
        assert!(selection.placeholder_shown);
        let children = surface.children(target::CARD_LIST);
        assert_eq!(children.len(), 1);
        assert!(children[0].has_class(NO_CARDS_CLASS));
        assert_eq!(children[0].text_content(), "No slapable cards for France yet.");
        assert!(surface.is_visible(target::DRAWER));
    }

    #[test]
    fn test_country_with_cards_renders_them() {
        let mut surface = RecordingSurface::new();
        let mut controller = controller();
        controller.initialize(&mut surface);

        let selection = selected(
            controller.handle(&mut surface, UiEvent::CountrySelected("US".to_string())),
        );

        assert_eq!(selection.rendered, vec!["us-001".to_string()]);
        assert!(!selection.placeholder_shown);
        let children = surface.children(target::CARD_LIST);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].attribute("data-card-id"), Some("us-001"));
        assert_eq!(
            surface.texts.get(target::DRAWER_TITLE).map(String::as_str),
            Some("🇺🇸 United States")
        );
        assert_eq!(controller.state().selected_iso(), Some("US"));
    }

    #[test]
    fn test_reselect_rerenders_in_place() {
        let mut surface = RecordingSurface::new();
        let mut controller = controller();

        controller.handle(&mut surface, UiEvent::CountrySelected("us".to_string()));
        controller.handle(&mut surface, UiEvent::MapClicked("fr".to_string()));

        let children = surface.children(target::CARD_LIST);
        assert_eq!(children.len(), 1);
        assert!(children[0].has_class(NO_CARDS_CLASS));
        assert_eq!(controller.state().selected_iso(), Some("FR"));
        assert!(surface.is_visible(target::DRAWER));
    }

    #[test]
    fn test_close_hides_drawer() {
        let mut surface = RecordingSurface::new();
        let mut controller = controller();
        controller.handle(&mut surface, UiEvent::CountrySelected("US".to_string()));

        let outcome = controller.handle(&mut surface, UiEvent::DrawerClosed);

        assert_eq!(outcome, EventOutcome::Closed);
        assert!(!surface.is_visible(target::DRAWER));
        assert_eq!(controller.state(), &DrawerState::Closed);
    }

    #[test]
    fn test_unknown_country_is_ignored() {
        let mut surface = RecordingSurface::new();
        let mut controller = controller();

        let outcome = controller.handle(&mut surface, UiEvent::CountrySelected("ZZ".to_string()));

        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(controller.state(), &DrawerState::Closed);
        assert!(surface.children(target::CARD_LIST).is_empty());
    }

    #[test]
    fn test_falls_back_to_card_country() {
        let countries = CountryStore::from_countries(Vec::new());
        let cards = CardStore::from_cards(vec![Card::new(
            "jp-001",
            CardCountry::new("Japan", "🇯🇵", "JP"),
            "Natto",
            "food",
        )]);
        let mut controller =
            GameController::new(Arc::new(countries), Arc::new(cards), GameConfig::default());
        let mut surface = RecordingSurface::new();

        let selection = selected(controller.handle(&mut surface, UiEvent::MapClicked("jp".to_string())));

        assert_eq!(selection.country_name, "Japan");
        assert_eq!(selection.rendered, vec!["jp-001".to_string()]);
    }

    #[test]
    fn test_missing_template_renders_nothing_but_opens_drawer() {
        let mut surface = RecordingSurface::new().without_templates();
        let mut controller = controller();

        let selection = selected(
            controller.handle(&mut surface, UiEvent::CountrySelected("US".to_string())),
        );

        assert!(selection.rendered.is_empty());
        assert!(!selection.placeholder_shown);
        assert!(surface.is_visible(target::DRAWER));
    }

    #[test]
    fn test_slap() {
        let mut surface = RecordingSurface::new();
        let mut controller = controller();

        assert_eq!(
            controller.handle(&mut surface, UiEvent::Slapped("us-001".to_string())),
            EventOutcome::Slapped {
                card_id: "us-001".to_string(),
                title: "Elon Musk".to_string(),
            }
        );
        assert_eq!(
            controller.handle(&mut surface, UiEvent::Slapped("nope".to_string())),
            EventOutcome::Ignored
        );
    }
}
