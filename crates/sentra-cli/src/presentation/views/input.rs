//! Text input, submit button and error banner.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use unicode_width::UnicodeWidthChar;

use crate::presentation::view_models::{InputViewModel, SubmitButtonViewModel};

/// Wrap `text` at `width` display columns, breaking on newlines, and scroll
/// so the cursor row is visible.
///
/// Returns the visible lines and the cursor as (column, row) inside them.
pub(crate) fn layout_input(
    text: &str,
    cursor: usize,
    width: u16,
    height: u16,
) -> (Vec<String>, (u16, u16)) {
    let width = width.max(1) as usize;
    let height = height.max(1) as usize;

    let mut lines = vec![String::new()];
    let mut col = 0;
    let mut cursor_at = None;

    for (index, ch) in text.chars().enumerate() {
        if ch == '\n' {
            if index == cursor {
                cursor_at = Some((col, lines.len() - 1));
            }
            lines.push(String::new());
            col = 0;
            continue;
        }

        let ch_width = ch.width().unwrap_or(0);
        if col > 0 && col + ch_width > width {
            lines.push(String::new());
            col = 0;
        }
        if index == cursor {
            cursor_at = Some((col, lines.len() - 1));
        }
        if let Some(line) = lines.last_mut() {
            line.push(ch);
        }
        col += ch_width;
    }

    let (cursor_col, cursor_row) = match cursor_at {
        Some(at) => at,
        None if col >= width => {
            lines.push(String::new());
            (0, lines.len() - 1)
        }
        None => (col, lines.len() - 1),
    };

    let offset = (cursor_row + 1).saturating_sub(height);
    let visible = lines.into_iter().skip(offset).take(height).collect();

    (visible, (cursor_col as u16, (cursor_row - offset) as u16))
}

pub struct InputView<'a> {
    model: &'a InputViewModel,
    title: &'a str,
}

impl<'a> InputView<'a> {
    pub fn new(model: &'a InputViewModel, title: &'a str) -> Self {
        Self { model, title }
    }

    fn block(&self) -> Block<'a> {
        let border = if self.model.editable {
            Color::Blue
        } else {
            Color::DarkGray
        };
        Block::default()
            .title(Span::styled(
                format!(" 🐦 {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
    }

    /// Terminal cursor position for `area`, if the input accepts typing.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.model.editable {
            return None;
        }
        let inner = self.block().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let (_, (col, row)) =
            layout_input(&self.model.text, self.model.cursor, inner.width, inner.height);
        Some(Position::new(inner.x + col, inner.y + row))
    }
}

impl Widget for InputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if self.model.text.is_empty() {
            Paragraph::new(Span::styled(
                self.model.placeholder,
                Style::default().fg(Color::DarkGray),
            ))
            .render(inner, buf);
            return;
        }

        let (visible, _) =
            layout_input(&self.model.text, self.model.cursor, inner.width, inner.height);
        let lines: Vec<Line> = visible.into_iter().map(Line::from).collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

pub struct SubmitButtonView<'a> {
    model: &'a SubmitButtonViewModel,
}

impl<'a> SubmitButtonView<'a> {
    pub fn new(model: &'a SubmitButtonViewModel) -> Self {
        Self { model }
    }
}

impl Widget for SubmitButtonView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.model.enabled {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        };

        let label = if self.model.loading {
            self.model.label.clone()
        } else {
            format!("↗ {}  [Enter]", self.model.label)
        };

        Paragraph::new(Line::from(label))
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .render(area, buf);
    }
}

pub struct ErrorBannerView<'a> {
    message: &'a str,
}

impl<'a> ErrorBannerView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for ErrorBannerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(self.message, Style::default().fg(Color::Red)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .render(area, buf);
    }
}
