use sentra_client::{Error, SentimentResult};

/// Shown in place of any analysis failure.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze sentiment. Please try again.";

/// Where the view is in the request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing typed, nothing analyzed.
    Idle,
    /// Text present, no request made yet.
    Editing,
    /// A request is in flight.
    Pending,
    /// The last request finished with a result or an error.
    Resolved,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "Ready",
            Phase::Editing => "Editing",
            Phase::Pending => "Analyzing",
            Phase::Resolved => "Done",
        }
    }
}

/// Edits the input field understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Clear,
}

#[derive(Debug, Clone, Default)]
pub struct RequestState {
    input_text: String,
    /// Cursor position in chars, `0..=input_text.chars().count()`.
    cursor: usize,
    current_result: Option<SentimentResult>,
    is_loading: bool,
    last_error: Option<String>,
}

impl RequestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let input_text = text.into();
        let cursor = input_text.chars().count();
        Self {
            input_text,
            cursor,
            ..Self::default()
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_result(&self) -> Option<&SentimentResult> {
        self.current_result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Pending
        } else if self.current_result.is_some() || self.last_error.is_some() {
            Phase::Resolved
        } else if self.input_text.is_empty() {
            Phase::Idle
        } else {
            Phase::Editing
        }
    }

    /// Whether the input accepts edits. False only while a request is in flight.
    pub fn is_editable(&self) -> bool {
        !self.is_loading
    }

    /// Apply an edit to the input text. Returns false, leaving the state
    /// untouched, while a request is in flight.
    pub fn edit(&mut self, edit: InputEdit) -> bool {
        if !self.is_editable() {
            return false;
        }

        let len = self.input_text.chars().count();
        match edit {
            InputEdit::Insert(c) => {
                let at = self.byte_offset(self.cursor);
                self.input_text.insert(at, c);
                self.cursor += 1;
            }
            InputEdit::Backspace => {
                if self.cursor > 0 {
                    let at = self.byte_offset(self.cursor - 1);
                    self.input_text.remove(at);
                    self.cursor -= 1;
                }
            }
            InputEdit::Delete => {
                if self.cursor < len {
                    let at = self.byte_offset(self.cursor);
                    self.input_text.remove(at);
                }
            }
            InputEdit::Left => self.cursor = self.cursor.saturating_sub(1),
            InputEdit::Right => self.cursor = (self.cursor + 1).min(len),
            InputEdit::Home => self.cursor = 0,
            InputEdit::End => self.cursor = len,
            InputEdit::Clear => {
                self.input_text.clear();
                self.cursor = 0;
            }
        }
        true
    }

    /// Replace the whole input. Same gating as [`RequestState::edit`].
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.input_text = text.into();
        self.cursor = self.input_text.chars().count();
        true
    }

    /// Insert pasted text at the cursor. Line breaks are kept as `\n` and tabs
    /// become spaces. Same gating as [`RequestState::edit`].
    pub fn paste(&mut self, text: &str) -> bool {
        if !self.is_editable() {
            return false;
        }

        let normalized: String = text
            .replace("\r\n", "\n")
            .chars()
            .map(|c| match c {
                '\r' => '\n',
                '\t' => ' ',
                c => c,
            })
            .collect();

        let at = self.byte_offset(self.cursor);
        self.input_text.insert_str(at, &normalized);
        self.cursor += normalized.chars().count();
        true
    }

    /// Submit is allowed only with non-blank text and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.input_text.trim().is_empty()
    }

    /// Enter `Pending` and hand back the text to send, or refuse without
    /// touching anything.
    ///
    /// This guard is what keeps at most one request in flight. The previous
    /// result stays visible; the previous error is cleared.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.is_loading = true;
        self.last_error = None;
        Some(self.input_text.clone())
    }

    /// Fold a finished request into the state.
    ///
    /// Success replaces the result wholesale and clears the error. Failure
    /// records the fixed message and keeps the prior result. Either way the
    /// loading flag is cleared. Outcomes arriving outside `Pending` are
    /// ignored.
    pub fn resolve(&mut self, outcome: Result<SentimentResult, Error>) -> bool {
        if !self.is_loading {
            tracing::warn!("ignoring analysis outcome with no request in flight");
            return false;
        }

        self.is_loading = false;
        match outcome {
            Ok(result) => {
                self.current_result = Some(result);
                self.last_error = None;
            }
            Err(err) => {
                tracing::error!(error = %err, "error analyzing sentiment");
                self.last_error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.input_text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input_text.len())
    }
}
