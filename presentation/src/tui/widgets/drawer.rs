//! Drawer widget — the selected country's cards

use crate::surface::CardView;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use slapworld_domain::{CardCategory, target};

pub struct DrawerWidget<'a> {
    state: &'a TuiState,
}

impl<'a> DrawerWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn card_lines(card: &CardView, highlighted: bool) -> Vec<Line<'static>> {
        let category = CardCategory::from(card.category.as_str());
        let (marker, title_style) = if highlighted {
            (
                "▶ ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
        } else {
            ("  ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        };

        let mut lines = vec![
            Line::from(vec![
                Span::raw(marker),
                Span::styled(card.title.clone(), title_style),
                Span::styled(format!("  [{}]", card.id), Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                Span::raw(format!("  {} {}  ", card.flag, card.country)),
                Span::styled(
                    format!("{} {}", category.icon(), category.as_str()),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
        ];
        if !card.description.is_empty() {
            lines.push(Line::raw(format!("  {}", card.description)));
        }
        lines.push(Line::styled(
            format!("  🖼  {}", card.image),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::styled(
            format!("  {}", card.slaps),
            Style::default().fg(Color::Red),
        ));
        lines.push(Line::raw(""));
        lines
    }
}

impl<'a> Widget for DrawerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.drawer_open() {
            let hint = vec![
                Line::raw(""),
                Line::styled(
                    "Pick a country and press Enter, or press m to click the map.",
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            let block = Block::default()
                .borders(Borders::ALL)
                .title(" Drawer ")
                .style(Style::default().fg(Color::DarkGray));
            Paragraph::new(hint)
                .block(block)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let title = self
            .state
            .surface
            .text(target::DRAWER_TITLE)
            .unwrap_or_default();

        let mut lines = Vec::new();
        if let Some(notice) = self.state.surface.notice() {
            lines.push(Line::raw(""));
            lines.push(Line::styled(notice, Style::default().fg(Color::DarkGray)));
        }
        for (i, card) in self.state.cards().iter().enumerate() {
            lines.extend(Self::card_lines(card, i == self.state.card_cursor));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .title_bottom(" Esc: close ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TerminalSurface;
    use crate::tui::widgets::buffer_text;
    use slapworld_application::{
        CardStore, CountryStore, GameConfig, GameController, RenderSurface, UiEvent,
    };
    use slapworld_domain::{Card, CardCountry, Country};
    use std::sync::Arc;

    fn open_state(iso: &str) -> TuiState {
        let countries = CountryStore::from_countries(vec![
            Country::new("Germany", "🇩🇪", "DE"),
            Country::new("Japan", "🇯🇵", "JP"),
        ]);
        let cards = CardStore::from_cards(vec![
            Card::new("de-001", CardCountry::new("Germany", "🇩🇪", "DE"), "Brandenburg Gate", "landmark")
                .with_slap_count(4200),
            Card::new("de-002", CardCountry::new("Germany", "🇩🇪", "DE"), "Oktoberfest", "event"),
        ]);
        let mut controller =
            GameController::new(Arc::new(countries), Arc::new(cards), GameConfig::default());
        let mut surface = TerminalSurface::new();
        controller.initialize(&mut surface);
        controller.handle(&mut surface, UiEvent::CountrySelected(iso.into()));
        TuiState::new(surface, "p")
    }

    fn render(state: &TuiState) -> String {
        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        DrawerWidget::new(state).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_closed_drawer_shows_hint() {
        let mut surface = TerminalSurface::new();
        surface.set_visible(target::DRAWER, false);
        let state = TuiState::new(surface, "p");

        let text = render(&state);

        assert!(text.contains("Pick a country"));
    }

    #[test]
    fn test_open_drawer_lists_cards() {
        let state = open_state("DE");

        let text = render(&state);

        assert!(text.contains("Germany"));
        assert!(text.contains("▶ Brandenburg Gate"));
        assert!(text.contains("  Oktoberfest"));
        assert!(text.contains("4,200 slaps"));
    }

    #[test]
    fn test_open_drawer_without_cards_shows_notice() {
        let state = open_state("JP");

        let text = render(&state);

        assert!(text.contains("No slapable cards for Japan yet."));
    }
}
