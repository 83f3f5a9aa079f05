//! Header widget — game title and player name

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use slapworld_domain::target;

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = self
            .state
            .surface
            .text(target::PAGE_TITLE)
            .unwrap_or("Slap The World Around");

        let mut spans = vec![
            Span::styled("🌍 ", Style::default().fg(Color::Green)),
            Span::styled(
                title,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ];
        if !self.state.version.is_empty() {
            spans.push(Span::styled(
                format!(" v{}", self.state.version),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            &self.state.player,
            Style::default().fg(Color::Yellow),
        ));
        let line = Line::from(spans);

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TerminalSurface;
    use crate::tui::widgets::buffer_text;
    use slapworld_application::RenderSurface;

    #[test]
    fn test_header_shows_title_and_player() {
        let mut surface = TerminalSurface::new();
        surface.set_text(target::PAGE_TITLE, "Slap Europe");
        let state = TuiState::new(surface, "Player-0007");
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);

        HeaderWidget::new(&state).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Slap Europe"));
        assert!(text.contains("Player-0007"));
        assert!(!text.contains(" v"));
    }

    #[test]
    fn test_header_shows_version() {
        let state = TuiState::new(TerminalSurface::new(), "Player-0007").with_version("0.2.0");
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);

        HeaderWidget::new(&state).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("Slap The World Around v0.2.0"));
    }
}
