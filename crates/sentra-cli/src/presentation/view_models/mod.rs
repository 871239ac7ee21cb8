pub mod result;
pub mod screen;

pub use result::{SentimentViewModel, WordListsViewModel};
pub use screen::{InputViewModel, ScreenViewModel, StatusBarViewModel, SubmitButtonViewModel};
