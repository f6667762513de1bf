use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// A phrase queued for text-to-speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
}

/// Text-to-speech boundary. Real engines plug in here.
pub trait Speaker {
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;
}
