use crate::core::formatter::{can_use_format, format_time_to_speak};
use crate::core::transcript::check_transcript;
use crate::domain::model::{ClockTime, FormatMode, Verdict};
use crate::domain::ports::{Speaker, Utterance};
use crate::utils::error::{Result, SpeakTimeError};
use rand::Rng;

pub const DEFAULT_SPEECH_RATE: f32 = 0.9;

/// Practice state behind the clock widget: the time shown, the chosen
/// phrasing and whether speech is muted.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeSession {
    time: ClockTime,
    format: FormatMode,
    muted: bool,
    speech_rate: f32,
}

impl Default for PracticeSession {
    fn default() -> Self {
        Self {
            time: ClockTime::default(),
            format: FormatMode::Normal,
            muted: false,
            speech_rate: DEFAULT_SPEECH_RATE,
        }
    }
}

impl PracticeSession {
    pub fn new(time: ClockTime) -> Self {
        Self {
            time,
            ..Self::default()
        }
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn with_speech_rate(mut self, rate: f32) -> Self {
        self.speech_rate = rate;
        self
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn format(&self) -> &FormatMode {
        &self.format
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn set_time(&mut self, time: ClockTime) {
        self.time = time;
        self.refresh_format();
    }

    /// Applies an "HH:MM" value from the time input.
    ///
    /// Each component is taken only when in range (hour 1..=12, minute
    /// 0..=59); the rest of the state is left alone. Returns whether
    /// anything changed.
    pub fn set_time_input(&mut self, value: &str) -> bool {
        let mut parts = value.split(':').map(|p| p.trim().parse::<u32>().ok());
        let hour = parts.next().flatten();
        let minute = parts.next().flatten();
        let before = self.time;

        if let Some(h) = hour.filter(|h| (1..=12).contains(h)) {
            self.time.hour = h;
        }
        if let Some(m) = minute.filter(|m| *m <= 59) {
            self.time.minute = m;
        }

        if self.time == before {
            tracing::debug!(input = value, "time input ignored");
            false
        } else {
            self.refresh_format();
            true
        }
    }

    /// Zero-padded "HH:MM" for the time input.
    pub fn input_value(&self) -> String {
        self.time.to_string()
    }

    pub fn can_use_format(&self, mode: &FormatMode) -> bool {
        can_use_format(mode, self.time.minute)
    }

    pub fn select_format(&mut self, mode: FormatMode) -> Result<()> {
        if !self.can_use_format(&mode) {
            let err = SpeakTimeError::FormatNotAllowed {
                time: self.input_value(),
                format: mode.name().to_string(),
            };
            tracing::warn!("{}", err);
            return Err(err);
        }

        tracing::debug!(format = %mode, "format selected");
        self.format = mode;
        Ok(())
    }

    /// The format a learner would naturally reach for at this minute.
    pub fn suggested_format(&self) -> FormatMode {
        match self.time.minute {
            0 => FormatMode::Normal,
            m if m > 30 => FormatMode::To,
            _ => FormatMode::Past,
        }
    }

    pub fn auto_format(&mut self) -> &FormatMode {
        let suggested = self.suggested_format();
        if self.can_use_format(&suggested) {
            self.format = suggested;
        }
        &self.format
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.time = ClockTime {
            hour: rng.random_range(1..=12),
            minute: rng.random_range(0..60),
        };
        tracing::debug!(time = %self.time, "time randomized");
        self.refresh_format();
    }

    // Keeps the chosen format while it still fits the minutes.
    fn refresh_format(&mut self) {
        if !self.can_use_format(&self.format) {
            let previous = self.format.clone();
            self.auto_format();
            tracing::debug!(from = %previous, to = %self.format, "format no longer fits, switched");
        }
    }

    pub fn phrase(&self) -> String {
        format_time_to_speak(self.time.hour, self.time.minute, &self.format)
    }

    /// Sends the current phrase to the speaker unless muted.
    pub fn speak(&self, speaker: &mut dyn Speaker) -> Result<Option<String>> {
        if self.muted {
            tracing::debug!("muted, skipping speech");
            return Ok(None);
        }

        let utterance = Utterance {
            text: self.phrase(),
            rate: self.speech_rate,
        };
        speaker.speak(&utterance)?;
        Ok(Some(utterance.text))
    }

    pub fn check(&self, transcript: &str) -> Verdict {
        check_transcript(transcript, &self.phrase())
    }
}
