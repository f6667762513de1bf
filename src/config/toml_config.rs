use crate::core::session::{PracticeSession, DEFAULT_SPEECH_RATE};
use crate::domain::model::FormatMode;
use crate::utils::error::{Result, SpeakTimeError};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub practice: PracticeConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PracticeConfig {
    pub default_format: Option<FormatMode>,
    pub muted: Option<bool>,
    pub speech_rate: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SPEAK_TIME_FORMAT})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SpeakTimeError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn default_format(&self) -> FormatMode {
        self.practice.default_format.clone().unwrap_or_default()
    }

    pub fn muted(&self) -> bool {
        self.practice.muted.unwrap_or(false)
    }

    pub fn speech_rate(&self) -> f32 {
        self.practice.speech_rate.unwrap_or(DEFAULT_SPEECH_RATE)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().map(|l| l.level.as_str())
    }

    /// Builds a session from the configured preferences.
    ///
    /// A default format that cannot express the current time is dropped in
    /// favour of the suggested one.
    pub fn apply_to(&self, mut session: PracticeSession) -> PracticeSession {
        session = session
            .with_muted(self.muted())
            .with_speech_rate(self.speech_rate());

        if session.select_format(self.default_format()).is_err() {
            session.auto_format();
        }
        session
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(mode) = &self.practice.default_format {
            if !mode.is_recognized() {
                return Err(SpeakTimeError::InvalidConfigValueError {
                    field: "practice.default_format".to_string(),
                    value: mode.name().to_string(),
                    reason: "Valid formats: normal, past, to".to_string(),
                });
            }
        }

        if let Some(rate) = self.practice.speech_rate {
            validate_range("practice.speech_rate", rate, 0.1, 10.0)?;
        }

        if let Some(logging) = &self.logging {
            validate_non_empty_string("logging.level", &logging.level)?;
            validate_one_of("logging.level", &logging.level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ClockTime;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[practice]
default_format = "past"
muted = true
speech_rate = 1.2

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.default_format(), FormatMode::Past);
        assert!(config.muted());
        assert_eq!(config.speech_rate(), 1.2);
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.default_format(), FormatMode::Normal);
        assert!(!config.muted());
        assert_eq!(config.speech_rate(), DEFAULT_SPEECH_RATE);
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SPEAK_TIME_TEST_FORMAT", "to");

        let toml_content = r#"
[practice]
default_format = "${SPEAK_TIME_TEST_FORMAT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.default_format(), FormatMode::To);

        std::env::remove_var("SPEAK_TIME_TEST_FORMAT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[practice]
default_format = "${SPEAK_TIME_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let bad_rate = TomlConfig::from_toml_str("[practice]\nspeech_rate = 0.0\n").unwrap();
        assert!(bad_rate.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(TomlConfig::from_toml_str("[practice\nmuted = ").is_err());
    }

    #[test]
    fn test_apply_falls_back_when_default_format_is_disallowed() {
        let config = TomlConfig::from_toml_str("[practice]\ndefault_format = \"past\"\n").unwrap();
        let session = config.apply_to(PracticeSession::new(ClockTime::new(4, 50).unwrap()));
        assert_eq!(session.format(), &FormatMode::To);
        assert_eq!(session.phrase(), "ten minutes to five");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[practice]\nmuted = true\n").unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.muted());
    }
}
