use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sentra_client::Analyze;
use tokio::sync::mpsc::UnboundedReceiver;

use super::controller::{AnalysisController, AnalysisOutcome};
use super::state::{InputEdit, RequestState};
use crate::presentation::presenters::present_screen;
use crate::presentation::view_models::ScreenViewModel;

/// What a key press means to the analysis screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Submit,
    Edit(InputEdit),
}

pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    // Only handle key press events, not release or repeat
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('u') if ctrl => Some(Action::Edit(InputEdit::Clear)),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Edit(InputEdit::Backspace)),
        KeyCode::Delete => Some(Action::Edit(InputEdit::Delete)),
        KeyCode::Left => Some(Action::Edit(InputEdit::Left)),
        KeyCode::Right => Some(Action::Edit(InputEdit::Right)),
        KeyCode::Home => Some(Action::Edit(InputEdit::Home)),
        KeyCode::End => Some(Action::Edit(InputEdit::End)),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Action::Edit(InputEdit::Insert(c)))
        }
        _ => None,
    }
}

/// The analysis screen: request state, request dispatch and the outcome
/// channel, without any terminal I/O.
pub struct AnalysisView<A> {
    state: RequestState,
    controller: AnalysisController<A>,
    outcomes: UnboundedReceiver<AnalysisOutcome>,
    endpoint: String,
    tick: usize,
    should_quit: bool,
}

impl<A> AnalysisView<A>
where
    A: Analyze + 'static,
{
    pub fn new(client: A, endpoint: impl Into<String>) -> Self {
        Self::with_state(client, endpoint, RequestState::new())
    }

    pub fn with_state(client: A, endpoint: impl Into<String>, state: RequestState) -> Self {
        let (controller, outcomes) = AnalysisController::new(client);
        Self {
            state,
            controller,
            outcomes,
            endpoint: endpoint.into(),
            tick: 0,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = key_to_action(key) {
            self.apply(action);
        }
    }

    /// Pasted text goes into the input as-is; line breaks never submit.
    pub fn handle_paste(&mut self, text: &str) {
        self.state.paste(text);
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Submit => {
                self.submit();
            }
            Action::Edit(edit) => {
                self.state.edit(edit);
            }
        }
    }

    /// Start an analysis of the current input if the state allows it.
    pub fn submit(&mut self) -> bool {
        self.controller.submit(&mut self.state)
    }

    /// Wait for the in-flight request to finish.
    pub async fn recv_outcome(&mut self) -> Option<AnalysisOutcome> {
        self.outcomes.recv().await
    }

    pub fn apply_outcome(&mut self, outcome: AnalysisOutcome) {
        self.state.resolve(outcome);
    }

    /// Apply any outcomes that have already arrived, without waiting.
    pub fn drain_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcomes.try_recv() {
            self.apply_outcome(outcome);
            applied += 1;
        }
        applied
    }

    /// Advance the spinner while a request is in flight.
    pub fn on_tick(&mut self) {
        if self.state.is_loading() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    pub fn screen(&self) -> ScreenViewModel {
        present_screen(&self.state, &self.endpoint, self.tick)
    }
}
