use medic_speech::{
    AudioTranscriber, RecognitionError, SpeechError, SpeechSpeaker, Transcription, Utterance,
    VoiceAssistant, channel,
};
use std::collections::VecDeque;

struct ScriptedTranscriber {
    script: VecDeque<Result<Transcription, SpeechError>>,
}

impl ScriptedTranscriber {
    fn new(script: Vec<Result<Transcription, SpeechError>>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl AudioTranscriber for ScriptedTranscriber {
    async fn recv(&mut self) -> Result<Transcription, SpeechError> {
        self.script
            .pop_front()
            .unwrap_or(Ok(Transcription::Cancelled))
    }
}

#[derive(Default)]
struct RecordingSpeaker {
    spoken: Vec<Utterance>,
    cancels: usize,
    broken: bool,
}

impl SpeechSpeaker for RecordingSpeaker {
    async fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        if self.broken {
            return Err(SpeechError::Synthesis("no voices installed".to_string()));
        }
        self.spoken.push(utterance.clone());
        Ok(())
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }
}

fn final_text(text: &str) -> Result<Transcription, SpeechError> {
    Ok(Transcription::Final {
        text: text.to_string(),
        confidence: 0.9,
    })
}

#[tokio::test]
async fn test_run_speaks_each_final_result() {
    let transcriber = ScriptedTranscriber::new(vec![
        Ok(Transcription::Partial {
            text: "blood".to_string(),
            confidence: 0.4,
        }),
        final_text("blood pressure reading"),
        final_text("what's the weather"),
        Ok(Transcription::Cancelled),
        final_text("never reached"),
    ]);
    let mut assistant = VoiceAssistant::new(transcriber, RecordingSpeaker::default());
    assistant.run().await.unwrap();

    let (_, speaker, session) = assistant.into_parts();
    assert_eq!(speaker.spoken.len(), 2);
    assert!(speaker.spoken[0].text.starts_with("For blood pressure measurement"));
    assert!(speaker.spoken[1].text.starts_with("I didn't understand"));
    assert_eq!(session.transcript(), "what's the weather");
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn test_partial_result_does_not_speak() {
    let transcriber = ScriptedTranscriber::new(vec![Ok(Transcription::Partial {
        text: "wound".to_string(),
        confidence: 0.3,
    })]);
    let mut assistant = VoiceAssistant::new(transcriber, RecordingSpeaker::default());

    assert!(assistant.step().await.unwrap());
    assert_eq!(assistant.session().transcript(), "wound");
    assert!(assistant.session().response().is_none());
}

#[tokio::test]
async fn test_recognition_error_ends_listening_with_message() {
    let transcriber = ScriptedTranscriber::new(vec![
        Err(RecognitionError::NotAllowed.into()),
        final_text("emergency protocol"),
    ]);
    let mut assistant = VoiceAssistant::new(transcriber, RecordingSpeaker::default());
    assistant.run().await.unwrap();

    let message = assistant.session().error().unwrap();
    assert!(message.starts_with("Microphone access denied"));
    let (_, speaker, _) = assistant.into_parts();
    assert!(speaker.spoken.is_empty());
}

#[tokio::test]
async fn test_channel_error_propagates() {
    let transcriber =
        ScriptedTranscriber::new(vec![Err(SpeechError::Channel("gone".to_string()))]);
    let mut assistant = VoiceAssistant::new(transcriber, RecordingSpeaker::default());
    assert!(matches!(assistant.run().await, Err(SpeechError::Channel(_))));
}

#[tokio::test]
async fn test_synthesis_failure_is_not_fatal() {
    let speaker = RecordingSpeaker {
        broken: true,
        ..Default::default()
    };
    let transcriber = ScriptedTranscriber::new(vec![final_text("IV insertion")]);
    let mut assistant = VoiceAssistant::new(transcriber, speaker);
    assistant.run().await.unwrap();
    assert!(assistant.session().response().unwrap().starts_with("IV insertion procedure"));
}

#[tokio::test]
async fn test_repeat_and_toggle_voice() {
    let transcriber = ScriptedTranscriber::new(vec![final_text("medication dosage")]);
    let mut assistant = VoiceAssistant::new(transcriber, RecordingSpeaker::default());
    assistant.step().await.unwrap();
    assistant.repeat().await;

    assistant.toggle_voice();
    assistant.repeat().await;
    assistant.stop_speaking();

    let (_, speaker, session) = assistant.into_parts();
    assert!(!session.voice_enabled());
    assert_eq!(speaker.spoken.len(), 2);
    assert_eq!(speaker.spoken[0], speaker.spoken[1]);
    // once when voice was switched off, once on stop
    assert_eq!(speaker.cancels, 2);
}

#[tokio::test]
async fn test_channel_transcriber() {
    let (sender, transcriber) = channel(4);
    sender.send(final_text("wound assessment")).await.unwrap();
    sender.send(Ok(Transcription::Cancelled)).await.unwrap();

    let mut assistant = VoiceAssistant::new(transcriber, RecordingSpeaker::default());
    assistant.run().await.unwrap();
    assert_eq!(assistant.session().history()[0].phrase, "wound assessment");

    drop(sender);
    assert!(matches!(assistant.step().await, Err(SpeechError::Channel(_))));
}
