use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const CAPACITY: usize = 64;

type Lines = Arc<Mutex<VecDeque<(log::Level, String)>>>;

/// Collects log records so they can be shown inside the UI.
/// Writing to stderr would tear the alternate screen.
struct PanelLogger {
    lines: Lines,
    level: LevelFilter,
}

impl Log for PanelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == CAPACITY {
                lines.pop_front();
            }
            lines.push_back((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

pub fn install(level: LevelFilter) -> Result<LogView, SetLoggerError> {
    let lines = Lines::default();
    log::set_boxed_logger(Box::new(PanelLogger {
        lines: Arc::clone(&lines),
        level,
    }))?;
    log::set_max_level(level);
    Ok(LogView { lines })
}

pub struct LogView {
    lines: Lines,
}

impl LogView {
    pub fn draw(&self, header: Vec<Line<'static>>, height: u16) -> impl Widget {
        let mut text = Text::from(header);
        let room = usize::from(height.saturating_sub(2)).saturating_sub(text.lines.len());
        if let Ok(lines) = self.lines.lock() {
            let skip = lines.len().saturating_sub(room);
            for (level, msg) in lines.iter().skip(skip) {
                text.push_line(Line::from(vec![
                    Span::styled(format!("{level:<5} "), level_style(*level)),
                    Span::raw(msg.clone()),
                ]));
            }
        }
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title("Game"))
    }
}

fn level_style(level: log::Level) -> Style {
    match level {
        log::Level::Error => Style::new().fg(Color::Red),
        log::Level::Warn => Style::new().fg(Color::Yellow),
        log::Level::Info => Style::new().fg(Color::Green),
        log::Level::Debug | log::Level::Trace => Style::new().fg(Color::DarkGray),
    }
}
