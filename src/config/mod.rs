pub mod toml_config;

use crate::domain::model::FormatMode;
use crate::utils::error::{Result, SpeakTimeError};
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "speak-time"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Practice saying clock times in English")
)]
pub struct CliConfig {
    /// Time to practice, as HH:MM (24-hour input is accepted)
    #[cfg_attr(feature = "cli", arg(short, long, conflicts_with_all = ["now", "random"]))]
    pub time: Option<String>,

    /// Use the current local time
    #[cfg_attr(feature = "cli", arg(long, conflicts_with = "random"))]
    pub now: bool,

    /// Pick a random time
    #[cfg_attr(feature = "cli", arg(long))]
    pub random: bool,

    /// Phrasing: normal, past or to
    #[cfg_attr(feature = "cli", arg(short, long, value_parser = parse_format))]
    pub format: Option<FormatMode>,

    /// Choose the phrasing that suits the minutes
    #[cfg_attr(feature = "cli", arg(long, conflicts_with = "format"))]
    pub auto_format: bool,

    /// Check what you said against the expected phrase
    #[cfg_attr(feature = "cli", arg(long))]
    pub check: Option<String>,

    /// Skip speech output; the phrase is still printed
    #[cfg_attr(feature = "cli", arg(long))]
    pub mute: bool,

    /// Path to a TOML preferences file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Emit a JSON summary and JSON logs
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

// Strict parse: clap would otherwise go through `From<String>` and accept any name.
#[cfg(feature = "cli")]
fn parse_format(value: &str) -> Result<FormatMode> {
    value.parse()
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(FormatMode::Unrecognized(name)) = &self.format {
            return Err(SpeakTimeError::UnknownFormat { name: name.clone() });
        }
        if let Some(config) = &self.config {
            crate::utils::validation::validate_non_empty_string("config", config)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_fails_validation() {
        let config = CliConfig {
            format: Some(FormatMode::from_name("sideways")),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_cli_args() {
        let config =
            CliConfig::try_parse_from(["speak-time", "--time", "17:45", "--format", "to"]).unwrap();
        assert_eq!(config.time.as_deref(), Some("17:45"));
        assert_eq!(config.format, Some(FormatMode::To));
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(CliConfig::try_parse_from(["speak-time", "--format", "sideways"]).is_err());
        assert!(CliConfig::try_parse_from(["speak-time", "-f", "Past"]).is_err());
    }
}
