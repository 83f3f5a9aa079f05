//! TUI application — main loop
//!
//! ```text
//! GameApp (select! loop)
//!   ├─ crossterm EventStream ─▶ KeyHandler ─▶ Action
//!   │                                          └─▶ GameController::handle(UiEvent)
//!   │                                                └─▶ TerminalSurface
//!   └─ tick_interval (flash expiry)
//! ```

use super::keys::{Action, KeyHandler};
use super::state::TuiState;
use super::widgets::{
    MainLayout, drawer::DrawerWidget, header::HeaderWidget, picker::PickerWidget,
    status_bar::StatusBarWidget,
};
use crate::surface::TerminalSurface;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use slapworld_application::{EventOutcome, GameController, UiEvent};
use slapworld_domain::PlayerName;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::debug;

const FLASH_TTL: Duration = Duration::from_secs(4);

/// Interactive drawer UI
pub struct GameApp {
    controller: GameController,
    state: TuiState,
}

impl GameApp {
    /// Wire the controller to a fresh terminal surface and populate it
    pub fn new(mut controller: GameController, player: &PlayerName) -> Self {
        let mut surface =
            TerminalSurface::with_card_template(&controller.config().card_template_id);
        let version = controller.config().version.clone();
        controller.initialize(&mut surface);
        Self {
            controller,
            state: TuiState::new(surface, player.as_str()).with_version(version),
        }
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| Self::render(frame, &self.state))?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_terminal_event(event),
                        Some(Err(e)) => return Err(e),
                        None => break,
                    }
                }

                _ = tick.tick() => {
                    self.state.expire_flash(FLASH_TTL);
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Render all widgets
    fn render(frame: &mut ratatui::Frame, state: &TuiState) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(PickerWidget::new(state), layout.picker);
        frame.render_widget(DrawerWidget::new(state), layout.drawer);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        if state.show_help {
            let help_area = MainLayout::centered_overlay(60, 60, frame.area());
            frame.render_widget(ratatui::widgets::Clear, help_area);
            Self::render_help(frame, help_area);
        }
    }

    fn render_help(frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        use ratatui::style::{Color, Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Picker:"),
            Line::from("  j/k    Move down/up"),
            Line::from("  Enter  Open the drawer for the country"),
            Line::from("  m      Click the map (random country)"),
            Line::from(""),
            Line::from("Drawer:"),
            Line::from("  h/l    Previous/next card"),
            Line::from("  s      Slap the highlighted card"),
            Line::from("  Esc    Close the drawer"),
            Line::from(""),
            Line::from("  ?      Toggle this help"),
            Line::from("  q      Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Press ? or Esc to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = KeyHandler::handle(key);
                // Help overlay swallows everything but its own toggles
                if self.state.show_help {
                    if matches!(action, Action::ToggleHelp | Action::CloseDrawer) {
                        self.state.show_help = false;
                    }
                    return;
                }
                self.handle_action(action);
            }
            Event::Resize(_, _) => {
                // Terminal auto-resizes on next draw
            }
            _ => {}
        }
    }

    /// Handle a semantic key action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.state.should_quit = true,
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,

            Action::PickerUp => self.state.picker_up(),
            Action::PickerDown => self.state.picker_down(),
            Action::Select => {
                if let Some(option) = self.state.highlighted_option() {
                    let iso = option.value.clone();
                    self.dispatch(UiEvent::CountrySelected(iso));
                }
            }
            Action::RandomCountry => {
                let iso = self
                    .controller
                    .countries()
                    .random(1)
                    .first()
                    .map(|c| c.iso.clone());
                match iso {
                    Some(iso) => {
                        self.state.focus_option(&iso);
                        self.dispatch(UiEvent::MapClicked(iso));
                    }
                    None => self.state.set_flash("No countries loaded"),
                }
            }

            Action::CloseDrawer => {
                if self.state.drawer_open() {
                    self.dispatch(UiEvent::DrawerClosed);
                }
            }
            Action::NextCard => self.state.card_next(),
            Action::PrevCard => self.state.card_prev(),
            Action::Slap => match self.state.highlighted_card() {
                Some(card) if self.state.drawer_open() => {
                    self.dispatch(UiEvent::Slapped(card.id));
                }
                _ => self.state.set_flash("Nothing to slap"),
            },
        }
    }

    fn dispatch(&mut self, event: UiEvent) -> EventOutcome {
        debug!("Dispatching {:?}", event);
        let outcome = self.controller.handle(&mut self.state.surface, event);
        match &outcome {
            EventOutcome::Selected(selection) => {
                self.state.card_cursor = 0;
                let message = if selection.placeholder_shown {
                    format!("{}: no cards yet", selection.country_name)
                } else {
                    format!("{}: {} cards", selection.country_name, selection.rendered.len())
                };
                self.state.set_flash(message);
            }
            EventOutcome::Slapped { title, .. } => {
                self.state.set_flash(format!("👋 Slapped {}!", title));
            }
            EventOutcome::Closed => self.state.card_cursor = 0,
            EventOutcome::Ignored => self.state.set_flash("Nothing happened"),
        }
        outcome
    }
}
