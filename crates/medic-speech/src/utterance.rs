/// Text to be spoken, with prosody.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    /// Guidance is read slightly slower than normal speech.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: 0.8,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}
