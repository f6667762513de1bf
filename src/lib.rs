pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::speaker::{ConsoleSpeaker, RecordingSpeaker};
pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::drill::{build_drill_rows, write_drill_table};
pub use crate::core::formatter::{can_use_format, format_time_to_speak, number_to_words};
pub use crate::core::session::PracticeSession;
pub use crate::core::transcript::check_transcript;
pub use crate::domain::model::{ClockTime, FormatMode, Verdict};
pub use crate::utils::error::{Result, SpeakTimeError};
