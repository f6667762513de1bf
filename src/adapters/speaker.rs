use crate::core::{Speaker, Utterance};
use crate::utils::error::{Result, SpeakTimeError};
use std::io::Write;

/// Prints phrases instead of voicing them.
pub struct ConsoleSpeaker<W: Write> {
    out: W,
}

impl ConsoleSpeaker<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleSpeaker<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Speaker for ConsoleSpeaker<W> {
    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        tracing::info!(rate = utterance.rate, "🔊 {}", utterance.text);
        writeln!(self.out, "{}", utterance.text).map_err(|e| SpeakTimeError::SpeechError {
            message: e.to_string(),
        })
    }
}

/// Keeps every utterance in memory.
#[derive(Debug, Default)]
pub struct RecordingSpeaker {
    pub utterances: Vec<Utterance>,
}

impl Speaker for RecordingSpeaker {
    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        self.utterances.push(utterance.clone());
        Ok(())
    }
}
