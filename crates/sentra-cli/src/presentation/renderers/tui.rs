//! Terminal renderer for the analysis screen.
//!
//! Owns the terminal (raw mode, alternate screen) and runs a single-threaded
//! cooperative loop: key presses, request outcomes and spinner ticks are
//! multiplexed with `tokio::select!`, and every pass redraws from a fresh
//! `ScreenViewModel`.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use sentra_client::Analyze;

use crate::app::AnalysisView;
use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::{
    ErrorBannerView, InputView, ResultView, StatusBarView, SubmitButtonView,
};

const TICK_RATE: Duration = Duration::from_millis(100);
const INPUT_HEIGHT: u16 = 7;

pub struct TuiRenderer<A> {
    view: AnalysisView<A>,
}

impl<A> TuiRenderer<A>
where
    A: Analyze + 'static,
{
    pub fn new(view: AnalysisView<A>) -> Self {
        Self { view }
    }

    /// Set up the terminal, run until the user quits, and restore the
    /// terminal on every exit path, including errors and panics.
    pub async fn run(mut self) -> Result<()> {
        ctrlc::set_handler(move || {
            restore_terminal();
            std::process::exit(0);
        })?;

        enable_raw_mode()?;
        let _restore = RestoreGuard::new(restore_terminal);
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        tracing::info!("terminal UI started");
        let result = self.event_loop(&mut terminal).await;
        tracing::info!("terminal UI stopped");

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(TICK_RATE);

        while !self.view.should_quit() {
            let screen = self.view.screen();
            terminal.draw(|f| draw(f, &screen))?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) => self.view.handle_key(key),
                    Some(Ok(Event::Paste(text))) => self.view.handle_paste(&text),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
                Some(outcome) = self.view.recv_outcome() => {
                    self.view.apply_outcome(outcome);
                }
                _ = ticker.tick() => self.view.on_tick(),
            }
        }

        Ok(())
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    );
}

/// Runs `restore` when dropped, so the terminal is put back on early returns
/// and while unwinding from a panic.
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Lay out and render one frame.
///
/// Layout: [input | error? | submit | results? | status bar]
pub fn draw(f: &mut Frame, screen: &ScreenViewModel) {
    let mut constraints = vec![Constraint::Length(INPUT_HEIGHT)];
    if screen.error.is_some() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(3));

    let chunks = Layout::vertical(constraints).split(f.area());
    let mut next = chunks.iter().copied();

    // Chunk count always matches the constraints pushed above.
    let (Some(input_area), error_area, Some(submit_area), Some(result_area), Some(status_area)) = (
        next.next(),
        screen.error.as_ref().and_then(|_| next.next()),
        next.next(),
        next.next(),
        next.next(),
    ) else {
        return;
    };

    let input_view = InputView::new(&screen.input, &screen.title);
    let cursor = input_view.cursor_position(input_area);
    f.render_widget(input_view, input_area);
    if let Some(position) = cursor {
        f.set_cursor_position(position);
    }

    if let (Some(message), Some(area)) = (&screen.error, error_area) {
        f.render_widget(ErrorBannerView::new(message), area);
    }

    f.render_widget(SubmitButtonView::new(&screen.submit), submit_area);

    if let Some(result) = &screen.result {
        f.render_widget(ResultView::new(result), result_area);
    }

    f.render_widget(StatusBarView::new(&screen.status_bar), status_area);
}
