//! Analysis view state and the controller that drives requests.
//!
//! `RequestState` is the single mutable container for the screen. It is owned
//! by an [`AnalysisView`] and threaded explicitly through input handling,
//! request dispatch and rendering.

pub mod controller;
pub mod state;
pub mod view;

pub use controller::{AnalysisController, AnalysisOutcome};
pub use state::{ANALYSIS_FAILED_MESSAGE, InputEdit, Phase, RequestState};
pub use view::{Action, AnalysisView, key_to_action};
