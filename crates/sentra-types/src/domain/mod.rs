pub mod polarity;
pub mod sentiment;

pub use polarity::*;
pub use sentiment::*;
