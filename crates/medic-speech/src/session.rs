use crate::{FALLBACK_RESPONSE, RecognitionError, Utterance, VoiceCommand, match_command};
use medic_base::log;

/// Matched commands kept in the history, newest first.
pub const HISTORY_LIMIT: usize = 5;

/// State of the voice command screen.
///
/// Updates take the session by value and hand back the next one, so the
/// owner decides where the state lives.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSession {
    voice_enabled: bool,
    transcript: String,
    response: Option<&'static str>,
    history: Vec<&'static VoiceCommand>,
    error: Option<String>,
}

impl Default for VoiceSession {
    fn default() -> Self {
        Self {
            voice_enabled: true,
            transcript: String::new(),
            response: None,
            history: Vec::new(),
            error: None,
        }
    }
}

impl VoiceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a final transcript. Returns the next session and, when voice
    /// output is on, the utterance to speak.
    pub fn process(mut self, transcript: &str) -> (Self, Option<Utterance>) {
        self.transcript = transcript.to_string();
        self.error = None;

        let response = match match_command(transcript) {
            Some(command) => {
                log::debug!("voice command matched: {}", command.phrase);
                self.history.insert(0, command);
                self.history.truncate(HISTORY_LIMIT);
                command.response
            }
            None => {
                log::debug!("no voice command for {:?}", transcript);
                FALLBACK_RESPONSE
            }
        };
        self.response = Some(response);

        let utterance = self.voice_enabled.then(|| Utterance::new(response));
        (self, utterance)
    }

    /// Show an interim transcript without acting on it.
    pub fn hear(mut self, partial: &str) -> Self {
        self.transcript = partial.to_string();
        self
    }

    pub fn fail(mut self, error: &RecognitionError) -> Self {
        self.error = Some(error.message());
        self
    }

    pub fn toggle_voice(mut self) -> Self {
        self.voice_enabled = !self.voice_enabled;
        self
    }

    /// The last response again, if there is one and voice output is on.
    pub fn repeat(&self) -> Option<Utterance> {
        self.response
            .filter(|_| self.voice_enabled)
            .map(Utterance::new)
    }

    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn response(&self) -> Option<&'static str> {
        self.response
    }

    pub fn history(&self) -> &[&'static VoiceCommand] {
        &self.history
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
