use crate::{AudioTranscriber, SpeechError, Transcription};
use tokio::sync::mpsc;

/// Transcriber fed by the host through a channel.
///
/// Platform recognisers deliver results from callbacks; the callback side
/// pushes into the sender returned by [`channel`] and the assistant awaits
/// them here.
#[derive(Debug)]
pub struct ChannelTranscriber {
    receiver: mpsc::Receiver<Result<Transcription, SpeechError>>,
}

pub fn channel(capacity: usize) -> (mpsc::Sender<Result<Transcription, SpeechError>>, ChannelTranscriber) {
    let (sender, receiver) = mpsc::channel(capacity);
    (sender, ChannelTranscriber { receiver })
}

impl AudioTranscriber for ChannelTranscriber {
    async fn recv(&mut self) -> Result<Transcription, SpeechError> {
        self.receiver
            .recv()
            .await
            .ok_or_else(|| SpeechError::Channel("recognizer closed".to_string()))?
    }
}
