use std::{io, time::Duration};

use masterbrain::{Command, Config, ConfigError, Controller};
use ratatui::{
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    DefaultTerminal, Frame,
};

use crate::{log_view::LogView, popup::Popup, presenter::TuiPresenter, seed_input::SeedInput};

enum Mode {
    Board,
    SeedEdit,
    Notice,
}

pub enum Message {
    Quit,
    Command(Command),
    Reset(Option<u64>),
    Dismiss,
}

pub struct App {
    controller: Controller<TuiPresenter>,
    mode: Mode,
    seed_input: SeedInput,
    log_view: LogView,
}

impl App {
    pub fn new(config: &Config, log_view: LogView) -> Result<Self, ConfigError> {
        Ok(Self {
            controller: Controller::new(config, TuiPresenter::new(config.sorted_feedback))?,
            mode: Mode::Board,
            seed_input: SeedInput::default(),
            log_view,
        })
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(message) = self.update() {
                match message {
                    Message::Quit => break,
                    Message::Command(command) => self.handle(command),
                    Message::Reset(seed) => {
                        match seed {
                            Some(seed) => self.handle(Command::Reseed(seed)),
                            None => self.handle(Command::Init),
                        }
                        self.mode = Mode::Board;
                    }
                    Message::Dismiss => {
                        let notice = self.controller.presenter_mut().notice.take();
                        self.mode = Mode::Board;
                        if notice.is_some_and(|n| n.restart) {
                            self.handle(Command::Init);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, command: Command) {
        self.controller.presenter_mut().status.clear();
        self.controller.handle(command);
        if self.controller.presenter().notice.is_some() {
            self.mode = Mode::Notice;
        }
    }

    pub fn update(&mut self) -> Option<Message> {
        if event::poll(Duration::from_millis(100)).ok()? {
            let event = event::read().ok()?;
            if let Mode::Notice = self.mode {
                return match event {
                    Event::Key(key) if matches!(key.code, KeyCode::Enter | KeyCode::Esc) => {
                        Some(Message::Dismiss)
                    }
                    _ => None,
                };
            }
            if let Mode::SeedEdit = self.mode {
                return self.seed_input.update(&event);
            }
            if let Event::Key(key_ev) = event {
                match key_ev.code {
                    KeyCode::Char('q') => return Some(Message::Quit),
                    KeyCode::Char('n') => self.mode = Mode::SeedEdit,
                    KeyCode::Char('r') => return Some(Message::Reset(None)),
                    _ => {
                        let presenter = self.controller.presenter_mut();
                        return presenter
                            .palette
                            .update(&event)
                            .or_else(|| presenter.board_view.update(&event));
                    }
                }
            }
        }
        None
    }

    fn draw(&self, frame: &mut Frame) {
        let presenter = self.controller.presenter();
        let horizontal =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]);
        let vertical = Layout::vertical([Constraint::Length(10), Constraint::Min(6)]);
        let [board, right] = horizontal.areas(frame.area());
        let [palette, info] = vertical.areas(right);
        frame.render_widget(presenter.board_view.draw(), board);
        frame.render_widget(presenter.palette.draw(), palette);

        let (used, max) = presenter.attempts();
        let header = vec![
            Line::raw(format!("Seed: {}", presenter.seed())),
            Line::raw(format!("Attempts: {used}/{max}")),
            Line::raw(presenter.last_result().unwrap_or_default()),
            Line::styled(presenter.status.clone(), Style::new().fg(Color::Yellow)),
            Line::raw("1-8 color  ←→ slot  space place  enter submit"),
            Line::raw("r restart  n seed  q quit"),
            Line::raw(""),
        ];
        frame.render_widget(self.log_view.draw(header, info.height), info);

        match self.mode {
            Mode::Board => {}
            Mode::SeedEdit => {
                let area = Popup::centered(frame.area(), 30, 3);
                frame.render_widget(self.seed_input.draw(), area);
            }
            Mode::Notice => {
                if let Some(notice) = &presenter.notice {
                    let area = Popup::centered(frame.area(), 44, 8);
                    frame.render_widget(
                        Popup::default()
                            .title(notice.title.as_str())
                            .content(presenter.notice_text(notice))
                            .border_style(Style::new().fg(Color::Yellow))
                            .style(Style::new().add_modifier(Modifier::BOLD)),
                        area,
                    );
                }
            }
        }
    }
}
