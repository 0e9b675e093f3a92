use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::KeyCode,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::events::{should_quit, EventHandler, UiEvent};
use crate::state::AppState;

type Backend = CrosstermBackend<Stdout>;

const TICK_RATE: Duration = Duration::from_millis(100);

pub struct TuiApp {
    terminal: Terminal<Backend>,
    event_handler: EventHandler,
    state: AppState,
}

impl TuiApp {
    pub fn new(state: AppState) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let event_handler = EventHandler::new(TICK_RATE);

        Ok(TuiApp {
            terminal,
            event_handler,
            state,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        while !self.state.should_quit {
            let state = &mut self.state;
            self.terminal.draw(|f| Self::render_ui(f, state))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn render_ui(f: &mut Frame, state: &mut AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Charts
                Constraint::Length(3), // Query row
                Constraint::Length(1), // Status line
            ])
            .split(f.area());

        Self::render_charts(f, chunks[0], state);
        Self::render_query_row(f, chunks[1], state);
        Self::render_status_line(f, chunks[2]);
    }

    fn render_charts(f: &mut Frame, area: Rect, state: &AppState) {
        if state.panels.is_empty() {
            return;
        }

        let count = state.panels.len() as u32;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, count); count as usize])
            .split(area);

        for (panel, row) in state.panels.iter().zip(rows.iter()) {
            panel.render(f, *row);
        }
    }

    fn render_query_row(f: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        state.query_input.render(
            f,
            columns[0],
            state.translator().translate("Water temperature:"),
        );

        let result = Paragraph::new(state.result_text()).block(
            Block::default().borders(Borders::ALL).title(
                state
                    .translator()
                    .translate("Membership function value:")
                    .to_string(),
            ),
        );
        f.render_widget(result, columns[1]);
    }

    fn render_status_line(f: &mut Frame, area: Rect) {
        let status = Paragraph::new(Line::from(Span::styled(
            "Type a reading, Enter to evaluate, Esc to quit",
            Style::default().fg(Color::DarkGray),
        )));
        f.render_widget(status, area);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match self
            .event_handler
            .next()
            .map_err(|error| io::Error::other(error.to_string()))?
        {
            UiEvent::Key(key) => {
                if should_quit(&key) {
                    self.state.quit();
                    return Ok(());
                }

                if key.code == KeyCode::Enter {
                    self.state.evaluate_query();
                    return Ok(());
                }

                // Live evaluation on every edit, as well as on submit
                if self.state.query_input.handle_key_event(key) {
                    self.state.evaluate_query();
                }
            }
            UiEvent::Tick => {}
            UiEvent::Resize(width, height) => {
                self.terminal.resize(Rect::new(0, 0, width, height))?;
            }
        }

        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore the terminal no matter how the loop ended
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
