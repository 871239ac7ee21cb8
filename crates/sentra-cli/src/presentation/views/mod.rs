//! Ratatui widgets for the analysis screen.
//!
//! Views borrow a view model and only map it onto widgets. Polarity to color
//! mapping lives here, not in the view models.

pub mod input;
pub mod result;
pub mod status_bar;

pub use input::{ErrorBannerView, InputView, SubmitButtonView};
pub use result::ResultView;
pub use status_bar::StatusBarView;

use ratatui::style::Color;
use sentra_types::Polarity;

pub(crate) fn polarity_to_color(polarity: Polarity) -> Color {
    match polarity {
        Polarity::Positive => Color::Green,
        Polarity::Negative => Color::Red,
        Polarity::Neutral => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_colors() {
        assert_eq!(polarity_to_color(Polarity::Positive), Color::Green);
        assert_eq!(polarity_to_color(Polarity::Negative), Color::Red);
        assert_eq!(polarity_to_color(Polarity::Neutral), Color::Gray);
    }
}
