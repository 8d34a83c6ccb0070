use crate::{SpeechError, Transcription, Utterance};

/// Async speech recognition.
#[allow(async_fn_in_trait)]
pub trait AudioTranscriber {
    /// Wait for the next recognition result.
    async fn recv(&mut self) -> Result<Transcription, SpeechError>;
}

/// Async speech synthesis.
#[allow(async_fn_in_trait)]
pub trait SpeechSpeaker {
    /// Speak the utterance, resolving once it has been handed to the engine.
    async fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError>;

    /// Stop whatever is being spoken.
    fn cancel(&mut self);
}
