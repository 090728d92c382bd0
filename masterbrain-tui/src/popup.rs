use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

#[derive(Debug, Default)]
pub struct Popup<'a> {
    title: Line<'a>,
    content: Text<'a>,
    border_style: Style,
    style: Style,
}

impl<'a> Popup<'a> {
    pub fn title(self, title: impl Into<Line<'a>>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }
    pub fn content(self, content: impl Into<Text<'a>>) -> Self {
        Self {
            content: content.into(),
            ..self
        }
    }
    pub fn border_style(self, border_style: Style) -> Self {
        Self {
            border_style,
            ..self
        }
    }
    pub fn style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    /// Rect of the given size centered in `area`, shrunk to fit.
    pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Widget for Popup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // ensure that all cells under the popup are cleared to avoid leaking content
        Clear.render(area, buf);
        let block = Block::new()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(self.border_style);
        Paragraph::new(self.content)
            .wrap(Wrap { trim: true })
            .style(self.style)
            .centered()
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fits() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(Popup::centered(area, 30, 4), Rect::new(25, 10, 30, 4));
        let tiny = Rect::new(2, 2, 10, 3);
        assert_eq!(Popup::centered(tiny, 30, 5), tiny);
    }

    #[test]
    fn style_applies_to_content() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        Popup::default()
            .content("hi")
            .style(Style::new().fg(Color::Red))
            .render(area, &mut buf);
        let cell = buf.content().iter().find(|c| c.symbol() == "h").unwrap();
        assert_eq!(cell.fg, Color::Red);
        assert_eq!(buf[(0, 0)].symbol(), "┌");
    }
}
