use std::fmt;

/// Failure reported by the recognition engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    NotAllowed,
    NoSpeech,
    Aborted,
    Network,
    AudioCapture,
    Other(String),
}

impl RecognitionError {
    /// Map an engine error code (`not-allowed`, `no-speech`, ...) to a variant.
    pub fn from_code(code: &str) -> Self {
        match code {
            "not-allowed" => RecognitionError::NotAllowed,
            "no-speech" => RecognitionError::NoSpeech,
            "aborted" => RecognitionError::Aborted,
            "network" => RecognitionError::Network,
            "audio-capture" => RecognitionError::AudioCapture,
            other => RecognitionError::Other(other.to_string()),
        }
    }

    /// Message shown to the user.
    pub fn message(&self) -> String {
        match self {
            RecognitionError::NotAllowed => "Microphone access denied. Please enable microphone \
                 permissions in your browser settings."
                .to_string(),
            RecognitionError::NoSpeech => {
                "No speech detected. Please try speaking again.".to_string()
            }
            RecognitionError::Aborted => {
                "Speech recognition was aborted. Please try again.".to_string()
            }
            RecognitionError::Network => {
                "Network error occurred. Please check your connection and try again.".to_string()
            }
            RecognitionError::AudioCapture => {
                "Audio capture failed. Please check your microphone and try again.".to_string()
            }
            RecognitionError::Other(code) => {
                format!("Speech recognition error: {code}. Please try again.")
            }
        }
    }
}

#[derive(Debug)]
pub enum SpeechError {
    Recognition(RecognitionError),
    Synthesis(String),
    Channel(String),
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechError::Recognition(err) => write!(f, "recognition error: {}", err.message()),
            SpeechError::Synthesis(msg) => write!(f, "synthesis error: {msg}"),
            SpeechError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for SpeechError {}

impl From<RecognitionError> for SpeechError {
    fn from(err: RecognitionError) -> Self {
        SpeechError::Recognition(err)
    }
}
