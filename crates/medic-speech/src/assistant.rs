use crate::{AudioTranscriber, SpeechError, SpeechSpeaker, Transcription, Utterance, VoiceSession};
use medic_base::log;

/// Listens for voice commands and reads the answers aloud.
pub struct VoiceAssistant<T, S> {
    transcriber: T,
    speaker: S,
    session: VoiceSession,
}

impl<T: AudioTranscriber, S: SpeechSpeaker> VoiceAssistant<T, S> {
    pub fn new(transcriber: T, speaker: S) -> Self {
        Self::with_session(transcriber, speaker, VoiceSession::default())
    }

    pub fn with_session(transcriber: T, speaker: S, session: VoiceSession) -> Self {
        Self {
            transcriber,
            speaker,
            session,
        }
    }

    pub fn session(&self) -> &VoiceSession {
        &self.session
    }

    pub fn into_parts(self) -> (T, S, VoiceSession) {
        (self.transcriber, self.speaker, self.session)
    }

    /// Handle one recognition result.
    ///
    /// Returns `Ok(false)` once listening has ended, either because the
    /// transcriber was cancelled or because recognition failed; the failure
    /// message is kept in the session.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Channel` if the transcriber went away.
    pub async fn step(&mut self) -> Result<bool, SpeechError> {
        let received = self.transcriber.recv().await;
        match received {
            Ok(Transcription::Final { text, confidence }) => {
                log::info!("heard {:?} ({:.2})", text, confidence);
                let (session, utterance) = std::mem::take(&mut self.session).process(&text);
                self.session = session;
                if let Some(utterance) = utterance {
                    self.say(&utterance).await;
                }
                Ok(true)
            }
            Ok(Transcription::Partial { text, .. }) => {
                self.session = std::mem::take(&mut self.session).hear(&text);
                Ok(true)
            }
            Ok(Transcription::Cancelled) => Ok(false),
            Err(SpeechError::Recognition(error)) => {
                log::warn!("recognition failed: {}", error.message());
                self.session = std::mem::take(&mut self.session).fail(&error);
                Ok(false)
            }
            Err(error) => Err(error),
        }
    }

    /// Keep handling results until listening ends.
    pub async fn run(&mut self) -> Result<(), SpeechError> {
        while self.step().await? {}
        Ok(())
    }

    /// Speak the last response again.
    pub async fn repeat(&mut self) {
        if let Some(utterance) = self.session.repeat() {
            self.say(&utterance).await;
        }
    }

    pub fn toggle_voice(&mut self) {
        self.session = std::mem::take(&mut self.session).toggle_voice();
        if !self.session.voice_enabled() {
            self.speaker.cancel();
        }
    }

    pub fn stop_speaking(&mut self) {
        self.speaker.cancel();
    }

    // a failed synthesis leaves the answer on screen, so it is not fatal
    async fn say(&mut self, utterance: &Utterance) {
        if let Err(error) = self.speaker.speak(utterance).await {
            log::warn!("could not speak response: {}", error);
        }
    }
}
