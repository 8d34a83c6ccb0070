//! Voice commands for hands-free guidance.
//!
//! Speech recognition and synthesis are capabilities supplied by the host
//! ([`AudioTranscriber`], [`SpeechSpeaker`]). This crate matches recognised
//! phrases against a fixed command table, keeps the voice screen's state in
//! [`VoiceSession`], and wires the pieces together in [`VoiceAssistant`].

pub mod assistant;
pub mod channel;
pub mod command;
pub mod error;
pub mod session;
pub mod traits;
pub mod transcription;
pub mod utterance;

pub use assistant::VoiceAssistant;
pub use channel::{ChannelTranscriber, channel};
pub use command::{COMMANDS, CommandCategory, FALLBACK_RESPONSE, VoiceCommand, commands_in, match_command};
pub use error::{RecognitionError, SpeechError};
pub use session::{HISTORY_LIMIT, VoiceSession};
pub use traits::{AudioTranscriber, SpeechSpeaker};
pub use transcription::Transcription;
pub use utterance::Utterance;
