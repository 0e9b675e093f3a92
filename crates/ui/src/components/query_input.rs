use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Single-line text box for the membership query
#[derive(Debug, Default)]
pub struct QueryInput {
    value: String,
}

impl QueryInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true when the text changed
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.value.push(c);
                true
            }
            KeyCode::Backspace => self.value.pop().is_some(),
            _ => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, title: &str) {
        let content = Line::from(vec![
            Span::raw(self.value.as_str()),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
        ]);

        let input = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string()),
        );

        f.render_widget(input, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_typing_and_backspace() {
        let mut input = QueryInput::default();
        assert!(input.handle_key_event(KeyEvent::new(KeyCode::Char('6'), KeyModifiers::NONE)));
        assert!(input.handle_key_event(KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE)));
        assert_eq!(input.value(), "60");

        assert!(input.handle_key_event(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)));
        assert_eq!(input.value(), "6");
    }

    #[test]
    fn test_backspace_on_empty_reports_no_change() {
        let mut input = QueryInput::default();
        assert!(!input.handle_key_event(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)));
    }

    #[test]
    fn test_unhandled_keys_ignored() {
        let mut input = QueryInput::default();
        assert!(!input.handle_key_event(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
        assert_eq!(input.value(), "");
    }
}
