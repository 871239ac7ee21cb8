use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::styled(self.model.phase_label, Style::default().fg(Color::Cyan)),
            Span::raw(" | "),
            Span::styled(&self.model.endpoint, Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[Enter]", key),
            Span::raw("analyze "),
            Span::styled("[Ctrl+U]", key),
            Span::raw("clear "),
            Span::styled("[Esc]", key),
            Span::raw("quit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
