mod result;
mod screen;

pub use result::{format_score, polarity_icon, present_result};
pub use screen::{SPINNER_FRAMES, present_screen};
