use enum_map::EnumMap;
use itertools::Itertools;
use masterbrain::{EngineError, Presenter, Session};
use masterbrain_types::{Attempt, Code, Mark};
use ratatui::text::{Line, Text};

use crate::{board::BoardView, palette::PaletteView};

/// Message that needs to be acknowledged before play continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    /// Row drawn above the body, cells and pegs as on the board.
    pub row: Option<Attempt>,
    /// Start a new game once dismissed.
    pub restart: bool,
}

pub struct TuiPresenter {
    pub board_view: BoardView,
    pub palette: PaletteView,
    pub status: String,
    pub notice: Option<Notice>,
    seed: u64,
    sorted_feedback: bool,
    attempts: (usize, u8),
    last_tally: Option<EnumMap<Mark, u8>>,
}

impl TuiPresenter {
    pub fn new(sorted_feedback: bool) -> Self {
        Self {
            board_view: BoardView::new(sorted_feedback),
            palette: PaletteView::default(),
            status: String::new(),
            notice: None,
            seed: 0,
            sorted_feedback,
            attempts: (0, 0),
            last_tally: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn attempts(&self) -> (usize, u8) {
        self.attempts
    }

    pub fn notice_text(&self, notice: &Notice) -> Text<'static> {
        let mut text = Text::default();
        if let Some(attempt) = &notice.row {
            text.push_line(self.board_view.attempt_line("Last: ".to_owned(), attempt));
            text.push_line(Line::raw(format!("{} {}", attempt.code, self.pegs(attempt))));
        }
        for line in notice.body.lines() {
            text.push_line(Line::raw(line.to_owned()));
        }
        text
    }

    fn pegs(&self, attempt: &Attempt) -> String {
        let marks = if self.sorted_feedback {
            attempt.feedback.display_order()
        } else {
            attempt.feedback.0
        };
        marks.iter().map(Mark::symbol).collect()
    }

    /// Summary of the most recent row, if any.
    pub fn last_result(&self) -> Option<String> {
        let tally = self.last_tally?;
        Some(format!(
            "Last: {} correct, {} present, {} absent",
            tally[Mark::Correct],
            tally[Mark::Present],
            tally[Mark::Absent]
        ))
    }
}

impl Presenter for TuiPresenter {
    fn render(&mut self, session: &Session) {
        self.board_view.on_state_change(session);
        self.palette.on_state_change(session);
        self.seed = session.seed();
        self.attempts = (session.attempts_used(), session.max_attempts());
        self.last_tally = session.history().last().map(|a| a.feedback.tally());
    }

    fn won(&mut self, attempt: &Attempt, attempts_used: usize) {
        self.status = "You win!".to_owned();
        self.notice = Some(Notice {
            title: "You win!".to_owned(),
            body: format!(
                "{} found in {attempts_used} attempts.\nPress Enter for a new game.",
                attempt.code
            ),
            row: None,
            restart: true,
        });
    }

    fn exhausted(&mut self, attempt: &Attempt, secret: &Code) {
        self.status = "Out of attempts".to_owned();
        self.notice = Some(Notice {
            title: "Out of attempts".to_owned(),
            body: format!(
                "The secret was {}.\nA new game has started.",
                secret.iter().join(", ")
            ),
            row: Some(*attempt),
            restart: false,
        });
    }

    fn incomplete(&mut self) {
        self.status = "Fill all slots first".to_owned();
    }

    fn rejected(&mut self, error: &EngineError) {
        self.status = error.to_string();
    }
}
