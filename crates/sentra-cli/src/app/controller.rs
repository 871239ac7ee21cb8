use std::sync::Arc;

use sentra_client::{Analyze, Error, SentimentResult};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::state::RequestState;

/// Outcome of one analysis request, as delivered back to the event loop.
pub type AnalysisOutcome = Result<SentimentResult, Error>;

/// Dispatches analysis requests for a [`RequestState`].
///
/// Each accepted submit spawns one task on the current tokio runtime; its
/// outcome comes back through the receiver returned by [`AnalysisController::new`]
/// and must be passed to [`RequestState::resolve`]. There is no lock: the
/// state's submit guard is what keeps a second request from starting.
pub struct AnalysisController<A> {
    client: Arc<A>,
    tx: UnboundedSender<AnalysisOutcome>,
}

impl<A> AnalysisController<A>
where
    A: Analyze + 'static,
{
    pub fn new(client: A) -> (Self, UnboundedReceiver<AnalysisOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            client: Arc::new(client),
            tx,
        };
        (controller, rx)
    }

    /// Submit the current input. Returns whether a request was started.
    pub fn submit(&self, state: &mut RequestState) -> bool {
        let Some(text) = state.begin_submit() else {
            tracing::debug!(
                loading = state.is_loading(),
                "submit ignored: blank input or request in flight"
            );
            return false;
        };

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = client.analyze(&text).await;
            // The receiver only goes away when the UI is shutting down.
            let _ = tx.send(outcome);
        });
        true
    }
}
