//! TUI widgets — ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Picker (30%) ─────┬── Drawer (flex) ───────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod drawer;
pub mod header;
pub mod picker;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub picker: Rect,
    pub drawer: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            picker: horizontal[0],
            drawer: horizontal[1],
            status_bar: vertical[2],
        }
    }

    /// Centered overlay rectangle for help dialog
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_splits_regions() {
        let layout = MainLayout::compute(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.header, Rect::new(0, 0, 100, 3));
        assert_eq!(layout.status_bar, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.picker, Rect::new(0, 3, 30, 26));
        assert_eq!(layout.drawer, Rect::new(30, 3, 70, 26));
    }

    #[test]
    fn test_centered_overlay_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let overlay = MainLayout::centered_overlay(60, 50, area);

        assert_eq!(overlay.width, 60);
        assert_eq!(overlay.height, 20);
        assert_eq!(overlay.x, 20);
        assert_eq!(overlay.y, 10);
    }
}
