pub mod drill;
pub mod formatter;
pub mod session;
pub mod transcript;

pub use crate::domain::model::{ClockTime, DrillRow, FormatMode, Verdict};
pub use crate::domain::ports::{Speaker, Utterance};
pub use crate::utils::error::Result;
