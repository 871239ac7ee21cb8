use super::result::SentimentViewModel;

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenViewModel {
    pub title: String,
    pub input: InputViewModel,
    pub submit: SubmitButtonViewModel,
    pub error: Option<String>,
    /// Absent until the first successful analysis.
    pub result: Option<SentimentViewModel>,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputViewModel {
    pub text: String,
    pub placeholder: &'static str,
    /// Cursor position in chars.
    pub cursor: usize,
    pub editable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonViewModel {
    pub label: String,
    pub enabled: bool,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarViewModel {
    pub phase_label: &'static str,
    pub endpoint: String,
}
