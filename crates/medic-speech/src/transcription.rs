/// One result from an [`AudioTranscriber`](crate::AudioTranscriber).
#[derive(Debug, Clone, PartialEq)]
pub enum Transcription {
    /// Interim hypothesis; may still change.
    Partial { text: String, confidence: f32 },
    Final { text: String, confidence: f32 },
    /// Listening was stopped.
    Cancelled,
}
