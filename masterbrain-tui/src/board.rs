use masterbrain::{Command, GameState, Session};
use masterbrain_types::{Attempt, Mark, CODE_LENGTH};
use ratatui::{
    crossterm::event::{Event, KeyCode},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::app::Message;

const CORRECT: Color = Color::Rgb(0x38, 0x8e, 0x3c);
const PRESENT: Color = Color::Rgb(0xff, 0xeb, 0x3b);
const ABSENT: Color = Color::Rgb(0xf4, 0x43, 0x36);
const CURRENT_UNSET: Color = Color::Rgb(0xbd, 0xbd, 0xbd);
const FUTURE_UNSET: Color = Color::Rgb(0x60, 0x60, 0x60);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Row {
    cells: [Option<masterbrain_types::Color>; CODE_LENGTH],
    pegs: Option<[Mark; CODE_LENGTH]>,
    current: bool,
}

pub struct BoardView {
    rows: Vec<Row>,
    cursor: usize,
    sorted_feedback: bool,
}

impl BoardView {
    pub fn new(sorted_feedback: bool) -> Self {
        Self {
            rows: Vec::new(),
            cursor: 0,
            sorted_feedback,
        }
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Right | KeyCode::Char('l') => {
                    self.cursor = (self.cursor + 1).min(CODE_LENGTH - 1);
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    self.cursor = self.cursor.saturating_sub(1);
                }
                KeyCode::Char(' ') => {
                    return Some(Message::Command(Command::PlaceSelected(self.cursor)));
                }
                KeyCode::Enter => return Some(Message::Command(Command::Submit)),
                _ => {}
            }
        }
        None
    }

    fn attempt_row(&self, attempt: &Attempt) -> Row {
        Row {
            cells: attempt.code.0.map(Some),
            pegs: Some(if self.sorted_feedback {
                attempt.feedback.display_order()
            } else {
                attempt.feedback.0
            }),
            current: false,
        }
    }

    pub fn on_state_change(&mut self, session: &Session) {
        let current = (session.state() == GameState::Playing).then(|| session.attempts_used());
        self.rows = (0..usize::from(session.max_attempts()))
            .map(|idx| {
                if let Some(attempt) = session.history().get(idx) {
                    self.attempt_row(attempt)
                } else if current == Some(idx) {
                    Row {
                        cells: *session.guess().slots(),
                        pegs: None,
                        current: true,
                    }
                } else {
                    Row::default()
                }
            })
            .collect();
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let lines = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(idx, row)| [self.row_line(idx, row), Line::raw("")]);
        Paragraph::new(lines.collect::<Vec<_>>()).block(Block::bordered().title("Board"))
    }

    /// A single submitted row drawn the same way as on the board.
    pub fn attempt_line(&self, label: String, attempt: &Attempt) -> Line<'static> {
        self.row_spans(Span::raw(label), &self.attempt_row(attempt))
    }

    fn row_line(&self, idx: usize, row: &Row) -> Line<'static> {
        let number = if row.current {
            Span::styled(format!("{:>2} ", idx + 1), Style::new().add_modifier(Modifier::BOLD))
        } else {
            Span::raw(format!("{:>2} ", idx + 1))
        };
        self.row_spans(number, row)
    }

    fn row_spans(&self, label: Span<'static>, row: &Row) -> Line<'static> {
        let mut spans = vec![label];
        for (slot, cell) in row.cells.iter().enumerate() {
            let bg = match (cell, row.current) {
                (Some(color), _) => term_color(*color),
                (None, true) => CURRENT_UNSET,
                (None, false) => FUTURE_UNSET,
            };
            let text = if row.current && slot == self.cursor {
                "[  ]"
            } else {
                "    "
            };
            spans.push(Span::styled(text, Style::new().bg(bg).fg(Color::White)));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(" "));
        match row.pegs {
            Some(pegs) => spans.extend(pegs.iter().map(|mark| {
                Span::styled(mark.symbol().to_string(), Style::new().fg(peg_color(*mark)))
            })),
            None => spans.extend(
                (0..CODE_LENGTH).map(|_| Span::styled("·", Style::new().fg(FUTURE_UNSET))),
            ),
        }
        Line::from(spans)
    }
}

pub fn term_color(color: masterbrain_types::Color) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

fn peg_color(mark: Mark) -> Color {
    match mark {
        Mark::Correct => CORRECT,
        Mark::Present => PRESENT,
        Mark::Absent => ABSENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masterbrain::Config;
    use masterbrain_types::Color::*;
    use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn session() -> Session {
        let mut session = Session::new(&Config {
            max_attempts: 3,
            seed: Some(9),
            ..Config::default()
        })
        .unwrap();
        session.init();
        session
    }

    #[test]
    fn rows_follow_session() {
        let mut session = session();
        let mut board = BoardView::new(true);
        board.on_state_change(&session);
        assert_eq!(board.rows.len(), 3);
        assert!(board.rows[0].current);
        assert!(!board.rows[1].current);

        // A winning guess leaves no current row to check.
        for (idx, color) in [Black, White, Brown, Red].into_iter().enumerate() {
            session.set_slot(idx, color).unwrap();
        }
        let secret = *session.secret().unwrap();
        if secret != masterbrain_types::Code::new([Black, White, Brown, Red]) {
            session.submit().unwrap();
            board.on_state_change(&session);
            assert_eq!(board.rows[0].cells, [Some(Black), Some(White), Some(Brown), Some(Red)]);
            assert!(board.rows[0].pegs.is_some());
            assert!(board.rows[1].current);
        }
    }

    #[test]
    fn attempt_line_shows_cells_and_pegs() {
        let attempt = Attempt::new(
            masterbrain_types::Code::new([Black, Brown, White, Purple]),
            masterbrain_types::Feedback([Mark::Correct, Mark::Present, Mark::Present, Mark::Absent]),
        );
        let line = BoardView::new(false).attempt_line("Last ".to_owned(), &attempt);
        assert_eq!(line.spans[0].content, "Last ");
        assert_eq!(line.spans[1].style.bg, Some(term_color(Black)));
        assert_eq!(line.spans[7].style.bg, Some(term_color(Purple)));
        let pegs: String = line.spans[10..].iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(pegs, "●◐◐○");
    }

    #[test]
    fn cursor_stays_on_board() {
        let mut board = BoardView::new(false);
        for _ in 0..10 {
            board.update(&key(KeyCode::Right));
        }
        assert_eq!(board.cursor, CODE_LENGTH - 1);
        assert!(matches!(
            board.update(&key(KeyCode::Char(' '))),
            Some(Message::Command(Command::PlaceSelected(3)))
        ));
        for _ in 0..10 {
            board.update(&key(KeyCode::Left));
        }
        assert_eq!(board.cursor, 0);
        assert!(matches!(
            board.update(&key(KeyCode::Enter)),
            Some(Message::Command(Command::Submit))
        ));
    }
}
