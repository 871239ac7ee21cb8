//! Results panel: polarity, score, word count and word chips.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{SentimentViewModel, WordListsViewModel};

use super::polarity_to_color;

const STATS_HEIGHT: u16 = 4;

pub struct ResultView<'a> {
    model: &'a SentimentViewModel,
}

impl<'a> ResultView<'a> {
    pub fn new(model: &'a SentimentViewModel) -> Self {
        Self { model }
    }
}

impl Widget for ResultView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                " 💬 Analysis Results ",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        block.render(area, buf);

        let [stats_area, words_area] =
            Layout::vertical([Constraint::Length(STATS_HEIGHT), Constraint::Min(0)]).areas(inner);

        render_stats(self.model, stats_area, buf);

        if let Some(lists) = &self.model.word_lists {
            render_word_lists(lists, words_area, buf);
        }
    }
}

fn stat_box(value: Line<'_>, caption: &str, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        value,
        Line::from(Span::styled(
            caption.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

fn render_stats(model: &SentimentViewModel, area: Rect, buf: &mut Buffer) {
    let color = polarity_to_color(model.polarity);
    let [sentiment, score, count] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(area);

    stat_box(
        Line::from(Span::styled(model.icon, Style::default().fg(color))),
        "Sentiment",
        sentiment,
        buf,
    );
    stat_box(
        Line::from(Span::styled(
            model.score_text.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        "Score",
        score,
        buf,
    );
    stat_box(
        Line::from(Span::styled(
            model.word_count.to_string(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        "Words Analyzed",
        count,
        buf,
    );
}

fn chips(words: &[String], chip: Style) -> Line<'static> {
    let mut spans = Vec::with_capacity(words.len() * 2);
    for word in words {
        spans.push(Span::styled(format!(" {} ", word), chip));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_word_lists(lists: &WordListsViewModel, area: Rect, buf: &mut Buffer) {
    let mut sections = Vec::new();
    if let Some(words) = &lists.positive {
        sections.push((
            "Positive Words",
            chips(words, Style::default().fg(Color::Black).bg(Color::LightGreen)),
        ));
    }
    if let Some(words) = &lists.negative {
        sections.push((
            "Negative Words",
            chips(words, Style::default().fg(Color::Black).bg(Color::LightRed)),
        ));
    }

    let count = sections.len() as u32;
    let areas = Layout::horizontal(
        (0..count).map(|_| Constraint::Ratio(1, count.max(1))),
    )
    .split(area);

    for ((title, line), section_area) in sections.into_iter().zip(areas.iter()) {
        Paragraph::new(line)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(Span::styled(
                        title,
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::TOP),
            )
            .render(*section_area, buf);
    }
}
