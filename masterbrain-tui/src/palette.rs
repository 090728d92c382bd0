use masterbrain::{Command, Session};
use masterbrain_types::{Color, ALL_COLORS};
use ratatui::{
    crossterm::event::{Event, KeyCode},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, Widget},
};

use crate::{app::Message, board::term_color};

pub struct PaletteView {
    selected: Color,
}

impl Default for PaletteView {
    fn default() -> Self {
        Self {
            selected: ALL_COLORS[0],
        }
    }
}

impl PaletteView {
    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            let color = match key.code {
                KeyCode::Char(c @ '1'..='8') => {
                    ALL_COLORS[c.to_digit(10).map_or(0, |d| d as usize - 1)]
                }
                KeyCode::Up | KeyCode::Char('k') => self.selected.prev(),
                KeyCode::Down | KeyCode::Char('j') => self.selected.next(),
                _ => return None,
            };
            return Some(Message::Command(Command::Select(color)));
        }
        None
    }

    pub fn on_state_change(&mut self, session: &Session) {
        self.selected = session.selected();
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let block = Block::new()
            .borders(Borders::ALL)
            .title(Line::raw("Colors").left_aligned());
        let items = ALL_COLORS.iter().enumerate().map(|(idx, color)| {
            let marker = if *color == self.selected { '>' } else { ' ' };
            Line::from(vec![
                Span::raw(format!("{marker}{} ", idx + 1)),
                Span::styled("    ", Style::new().bg(term_color(*color))),
                Span::raw(format!(" {color}")),
            ])
        });
        List::new(items).block(block)
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
    fn number_keys_select() {
        let mut palette = PaletteView::default();
        assert!(matches!(
            palette.update(&key(KeyCode::Char('1'))),
            Some(Message::Command(Command::Select(Color::Black)))
        ));
        assert!(matches!(
            palette.update(&key(KeyCode::Char('8'))),
            Some(Message::Command(Command::Select(Color::Purple)))
        ));
        assert!(palette.update(&key(KeyCode::Char('9'))).is_none());
    }

    #[test]
    fn arrows_cycle() {
        let mut palette = PaletteView::default();
        assert!(matches!(
            palette.update(&key(KeyCode::Up)),
            Some(Message::Command(Command::Select(Color::Purple)))
        ));
        assert!(matches!(
            palette.update(&key(KeyCode::Down)),
            Some(Message::Command(Command::Select(Color::White)))
        ));
    }
}
