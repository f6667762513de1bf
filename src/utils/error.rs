use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeakTimeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid time {hour}:{minute:02}: {reason}")]
    InvalidTime { hour: u32, minute: u32, reason: String },

    #[error("Invalid time input '{input}'")]
    InvalidTimeInput { input: String },

    #[error("Cannot express {time} using \"{format}\" format")]
    FormatNotAllowed { time: String, format: String },

    #[error("Unknown format '{name}' (expected normal, past or to)")]
    UnknownFormat { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Speech output failed: {message}")]
    SpeechError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SpeakTimeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SpeakTimeError::InvalidTime { .. }
            | SpeakTimeError::InvalidTimeInput { .. }
            | SpeakTimeError::FormatNotAllowed { .. }
            | SpeakTimeError::UnknownFormat { .. } => ErrorCategory::Input,
            SpeakTimeError::ConfigError { .. }
            | SpeakTimeError::InvalidConfigValueError { .. }
            | SpeakTimeError::TomlError(_) => ErrorCategory::Configuration,
            SpeakTimeError::IoError(_)
            | SpeakTimeError::CsvError(_)
            | SpeakTimeError::SerializationError(_)
            | SpeakTimeError::SpeechError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 格式不可用只是提示，時間仍然可以用其他格式念出
            SpeakTimeError::FormatNotAllowed { .. } => ErrorSeverity::Low,
            SpeakTimeError::InvalidTime { .. }
            | SpeakTimeError::InvalidTimeInput { .. }
            | SpeakTimeError::UnknownFormat { .. }
            | SpeakTimeError::SpeechError { .. } => ErrorSeverity::Medium,
            SpeakTimeError::ConfigError { .. }
            | SpeakTimeError::InvalidConfigValueError { .. }
            | SpeakTimeError::TomlError(_) => ErrorSeverity::High,
            SpeakTimeError::IoError(_)
            | SpeakTimeError::CsvError(_)
            | SpeakTimeError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SpeakTimeError::InvalidTime { .. } | SpeakTimeError::InvalidTimeInput { .. } => {
                "Use HH:MM with an hour between 0 and 23 and minutes between 0 and 59".to_string()
            }
            SpeakTimeError::FormatNotAllowed { .. } => {
                "Use \"past\" for minutes up to 30 and \"to\" for minutes after 30".to_string()
            }
            SpeakTimeError::UnknownFormat { .. } => {
                "Choose one of: normal, past, to".to_string()
            }
            SpeakTimeError::ConfigError { .. }
            | SpeakTimeError::InvalidConfigValueError { .. }
            | SpeakTimeError::TomlError(_) => {
                "Check the configuration file against the documented [practice] and [logging] sections".to_string()
            }
            SpeakTimeError::SpeechError { .. } => {
                "Run with --mute to skip speech output".to_string()
            }
            SpeakTimeError::IoError(_) => {
                "Check that the path exists and is writable".to_string()
            }
            SpeakTimeError::CsvError(_) | SpeakTimeError::SerializationError(_) => {
                "Retry the export; if it keeps failing, report the error".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => self.to_string(),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpeakTimeError>;
