//! Country picker widget

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct PickerWidget<'a> {
    state: &'a TuiState,
}

impl<'a> PickerWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for PickerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let options = self.state.options();
        let visible_rows = area.height.saturating_sub(2) as usize;
        // Scroll so the cursor row stays on screen
        let offset = (self.state.picker_cursor + 1).saturating_sub(visible_rows);

        let lines: Vec<Line> = options
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .map(|(i, option)| {
                if i == self.state.picker_cursor {
                    Line::styled(
                        format!("▶ {}", option.label),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(format!("  {}", option.label))
                }
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Countries ({}) ", options.len()))
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
