use crate::app::RequestState;
use crate::presentation::view_models::{
    InputViewModel, ScreenViewModel, StatusBarViewModel, SubmitButtonViewModel,
};

use super::result::present_result;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const TITLE: &str = "Twitter Sentiment Analysis";
const PLACEHOLDER: &str = "Enter your text here...";

pub fn present_screen(state: &RequestState, endpoint: &str, tick: usize) -> ScreenViewModel {
    let loading = state.is_loading();

    let label = if loading {
        format!("{} Analyzing...", SPINNER_FRAMES[tick % SPINNER_FRAMES.len()])
    } else {
        "Analyze Sentiment".to_string()
    };

    ScreenViewModel {
        title: TITLE.to_string(),
        input: InputViewModel {
            text: state.input_text().to_string(),
            placeholder: PLACEHOLDER,
            cursor: state.cursor(),
            editable: state.is_editable(),
        },
        submit: SubmitButtonViewModel {
            label,
            enabled: state.can_submit(),
            loading,
        },
        error: state.last_error().map(str::to_string),
        result: state.current_result().map(present_result),
        status_bar: StatusBarViewModel {
            phase_label: state.phase().label(),
            endpoint: endpoint.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ANALYSIS_FAILED_MESSAGE;
    use sentra_client::{Error, SentimentResult};

    const ENDPOINT: &str = "http://localhost:8000/analyze";

    fn ok_result() -> SentimentResult {
        SentimentResult {
            score: 1.0,
            positive_words: vec!["nice".into()],
            negative_words: vec![],
            tokens: vec!["nice".into()],
        }
    }

    #[test]
    fn test_idle_screen_has_no_result_or_error() {
        let vm = present_screen(&RequestState::new(), ENDPOINT, 0);
        assert_eq!(vm.title, "Twitter Sentiment Analysis");
        assert!(vm.result.is_none());
        assert!(vm.error.is_none());
        assert!(!vm.submit.enabled);
        assert_eq!(vm.submit.label, "Analyze Sentiment");
        assert_eq!(vm.status_bar.phase_label, "Ready");
    }

    #[test]
    fn test_pending_screen_shows_spinner_and_disables_submit() {
        let mut state = RequestState::with_text("nice");
        state.begin_submit();

        let vm = present_screen(&state, ENDPOINT, 3);
        assert!(vm.submit.loading);
        assert!(!vm.submit.enabled);
        assert!(!vm.input.editable);
        assert_eq!(vm.submit.label, "⠸ Analyzing...");
        assert!(vm.result.is_none());
    }

    #[test]
    fn test_failure_screen_shows_error_and_prior_result() {
        let mut state = RequestState::with_text("nice");
        state.begin_submit();
        state.resolve(Ok(ok_result()));
        state.begin_submit();
        state.resolve(Err(Error::Config("boom".into())));

        let vm = present_screen(&state, ENDPOINT, 0);
        assert_eq!(vm.error.as_deref(), Some(ANALYSIS_FAILED_MESSAGE));
        assert_eq!(vm.result.map(|r| r.score_text), Some("1.0".to_string()));
        assert!(vm.submit.enabled);
        assert_eq!(vm.input.text, "nice");
    }
}
