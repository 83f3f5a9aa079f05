//! Status bar widget — focus indicator + key hints + flash messages

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (indicator, color) = if self.state.drawer_open() {
            ("DRAWER", Color::Magenta)
        } else {
            ("PICKER", Color::Blue)
        };
        let indicator_style = Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD);
        let indicator_span = Span::styled(format!(" {} ", indicator), indicator_style);

        // Flash message or key hints on the right
        let right_text = if let Some((ref flash, _)) = self.state.flash_message {
            flash.clone()
        } else if self.state.drawer_open() {
            "h/l:card  s:slap  Esc:close  ?:help  q:quit".to_string()
        } else {
            "j/k:move  Enter:select  m:map  ?:help  q:quit".to_string()
        };

        let indicator_line = Line::from(vec![indicator_span]);
        let indicator_width = indicator.len() as u16 + 2; // padding
        buf.set_line(area.x, area.y, &indicator_line, indicator_width);

        // Right-aligned
        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + indicator_width {
            let right_line = Line::from(vec![Span::styled(
                right_text,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )]);
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
