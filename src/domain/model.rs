use crate::utils::error::{Result, SpeakTimeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A wall-clock reading. `hour` may be given in 24-hour or 12-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 {
            return Err(SpeakTimeError::InvalidTime {
                hour,
                minute,
                reason: "hour must be between 0 and 23".to_string(),
            });
        }
        if minute > 59 {
            return Err(SpeakTimeError::InvalidTime {
                hour,
                minute,
                reason: "minute must be between 0 and 59".to_string(),
            });
        }
        Ok(Self { hour, minute })
    }

    /// 解析輸入框格式 "HH:MM"
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || SpeakTimeError::InvalidTimeInput {
            input: input.to_string(),
        };

        let (h, m) = input.trim().split_once(':').ok_or_else(invalid)?;
        let hour = h.trim().parse::<u32>().map_err(|_| invalid())?;
        let minute = m.trim().parse::<u32>().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }

    pub fn from_chrono<T: chrono::Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }

    /// 0 maps to 12, 13..=23 map to 1..=11.
    pub fn hour12(&self) -> u32 {
        to_hour12(self.hour)
    }

    pub fn next_hour12(&self) -> u32 {
        (self.hour12() % 12) + 1
    }
}

fn to_hour12(hour: u32) -> u32 {
    if hour == 0 {
        12
    } else if hour > 12 {
        hour - 12
    } else {
        hour
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self {
            hour: 10,
            minute: 30,
        }
    }
}

/// How a time is phrased when spoken.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormatMode {
    /// Literal reading with quarter/half shortcuts, e.g. "ten five".
    #[default]
    Normal,
    /// "<minutes> minutes past <hour>", meaningful up to half past.
    Past,
    /// "<minutes> minutes to <next hour>", meaningful after half past.
    To,
    /// Any other name; the formatter falls back to a literal reading.
    Unrecognized(String),
}

impl FormatMode {
    pub const KNOWN: [FormatMode; 3] = [FormatMode::Normal, FormatMode::Past, FormatMode::To];

    /// Lenient parse: unknown names are kept as [`FormatMode::Unrecognized`].
    /// Names are matched exactly, so "Past" is unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name {
            "normal" => FormatMode::Normal,
            "past" => FormatMode::Past,
            "to" => FormatMode::To,
            _ => FormatMode::Unrecognized(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormatMode::Normal => "normal",
            FormatMode::Past => "past",
            FormatMode::To => "to",
            FormatMode::Unrecognized(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, FormatMode::Unrecognized(_))
    }
}

impl FromStr for FormatMode {
    type Err = SpeakTimeError;

    fn from_str(s: &str) -> Result<Self> {
        match FormatMode::from_name(s) {
            FormatMode::Unrecognized(name) => Err(SpeakTimeError::UnknownFormat { name }),
            mode => Ok(mode),
        }
    }
}

impl From<String> for FormatMode {
    fn from(value: String) -> Self {
        FormatMode::from_name(&value)
    }
}

impl From<FormatMode> for String {
    fn from(value: FormatMode) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of comparing what the user said with the expected phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail { expected: String, heard: String },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// One minute of a drill sheet, phrased in every format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillRow {
    pub time: String,
    pub normal: String,
    pub past: String,
    pub to: String,
    pub past_allowed: bool,
    pub to_allowed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour12_normalization() {
        assert_eq!(ClockTime::new(0, 0).unwrap().hour12(), 12);
        assert_eq!(ClockTime::new(12, 0).unwrap().hour12(), 12);
        assert_eq!(ClockTime::new(13, 0).unwrap().hour12(), 1);
        assert_eq!(ClockTime::new(23, 0).unwrap().hour12(), 11);
        assert_eq!(ClockTime::new(7, 0).unwrap().hour12(), 7);
    }

    #[test]
    fn test_next_hour_wraps() {
        assert_eq!(ClockTime::new(12, 45).unwrap().next_hour12(), 1);
        assert_eq!(ClockTime::new(0, 45).unwrap().next_hour12(), 1);
        assert_eq!(ClockTime::new(11, 45).unwrap().next_hour12(), 12);
    }

    #[test]
    fn test_clock_time_rejects_out_of_range() {
        assert!(ClockTime::new(24, 0).is_err());
        assert!(ClockTime::new(10, 60).is_err());
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(ClockTime::parse("09:05").unwrap(), ClockTime { hour: 9, minute: 5 });
        assert_eq!(ClockTime::parse(" 23:59 ").unwrap(), ClockTime { hour: 23, minute: 59 });
        assert!(ClockTime::parse("0905").is_err());
        assert!(ClockTime::parse("ab:cd").is_err());
        assert!(ClockTime::parse("10:75").is_err());
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(ClockTime { hour: 5, minute: 7 }.to_string(), "05:07");
    }

    #[test]
    fn test_format_mode_parsing() {
        assert_eq!(FormatMode::from_name("past"), FormatMode::Past);
        assert_eq!(
            FormatMode::from_name("Past"),
            FormatMode::Unrecognized("Past".to_string())
        );
        assert!("Past".parse::<FormatMode>().is_err());
        assert_eq!(
            FormatMode::from_name("quarterly"),
            FormatMode::Unrecognized("quarterly".to_string())
        );
        assert!("to".parse::<FormatMode>().is_ok());
        assert!("sideways".parse::<FormatMode>().is_err());
    }

    #[test]
    fn test_format_mode_serde_as_string() {
        let json = serde_json::to_string(&FormatMode::To).unwrap();
        assert_eq!(json, "\"to\"");
        let back: FormatMode = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(back, FormatMode::Normal);
    }
}
