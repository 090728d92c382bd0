use ratatui::{
    crossterm::event::{Event, KeyCode},
    widgets::Widget,
};

use crate::{app::Message, popup::Popup};

#[derive(Debug, Default)]
pub struct SeedInput {
    input: String,
}

impl SeedInput {
    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => self.input.push(c),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Esc => {
                    self.input.clear();
                    return Some(Message::Dismiss);
                }
                KeyCode::Enter => {
                    // Empty or too large for a u64: stay in the popup
                    let seed = self.input.parse::<u64>().ok()?;
                    self.input.clear();
                    return Some(Message::Reset(Some(seed)));
                }
                _ => {}
            }
        }
        None
    }

    pub fn draw(&self) -> impl Widget + '_ {
        Popup::default()
            .title("Input seed for new game")
            .content(self.input.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn digits_only() {
        let mut input = SeedInput::default();
        for c in ['4', 'x', '2'] {
            assert!(input.update(&key(KeyCode::Char(c))).is_none());
        }
        assert!(matches!(
            input.update(&key(KeyCode::Enter)),
            Some(Message::Reset(Some(42)))
        ));
        assert!(input.input.is_empty());
    }

    #[test]
    fn empty_is_ignored() {
        let mut input = SeedInput::default();
        assert!(input.update(&key(KeyCode::Enter)).is_none());
        input.update(&key(KeyCode::Char('7')));
        input.update(&key(KeyCode::Backspace));
        assert!(input.update(&key(KeyCode::Enter)).is_none());
    }
}
